use sea_orm::entity::prelude::*;

/// Row of `productos`
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "productos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_producto: i32,
    pub nombre: String,
    pub id_categoria: i32,
    pub codigo_barras: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((16, 2)))")]
    pub precio_venta: Decimal,
    pub cantidad_stock: i32,
    pub estado: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categoria::Entity",
        from = "Column::IdCategoria",
        to = "super::categoria::Column::IdCategoria",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Categoria,
}

impl Related<super::categoria::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categoria.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
