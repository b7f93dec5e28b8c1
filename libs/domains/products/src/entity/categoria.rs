use sea_orm::entity::prelude::*;

/// Row of `categorias`
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categorias")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_categoria: i32,
    pub descripcion: String,
    pub estado: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::producto::Entity")]
    Productos,
}

impl Related<super::producto::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Productos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
