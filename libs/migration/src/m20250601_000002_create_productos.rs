use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250601_000001_create_categorias::Categorias;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Productos::Table)
                    .if_not_exists()
                    .col(pk_auto(Productos::IdProducto))
                    .col(string_len(Productos::Nombre, 45))
                    .col(integer(Productos::IdCategoria))
                    .col(string_len_null(Productos::CodigoBarras, 150))
                    .col(decimal_len(Productos::PrecioVenta, 16, 2))
                    .col(integer(Productos::CantidadStock).default(0))
                    .col(boolean(Productos::Estado).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_productos_categorias")
                            .from(Productos::Table, Productos::IdCategoria)
                            .to(Categorias::Table, Categorias::IdCategoria)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Category listing sorts by name within one category
        manager
            .create_index(
                Index::create()
                    .name("idx_productos_id_categoria_nombre")
                    .table(Productos::Table)
                    .col(Productos::IdCategoria)
                    .col(Productos::Nombre)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_productos_estado_cantidad_stock")
                    .table(Productos::Table)
                    .col(Productos::Estado)
                    .col(Productos::CantidadStock)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Productos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Productos {
    Table,
    IdProducto,
    Nombre,
    IdCategoria,
    CodigoBarras,
    PrecioVenta,
    CantidadStock,
    Estado,
}
