//! Query interface over `productos`, every result joined with its `categorias` row.

use database::BaseRepository;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::entity::{Producto, categoria, producto};

#[derive(Clone)]
pub struct ProductoCrudRepository {
    base: BaseRepository<producto::Entity>,
}

impl ProductoCrudRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Producto>, DbErr> {
        let rows = producto::Entity::find()
            .order_by_asc(producto::Column::IdProducto)
            .find_also_related(categoria::Entity)
            .all(self.base.db())
            .await?;

        Ok(rows.into_iter().map(Producto::from).collect())
    }

    pub async fn find_by_id(&self, id_producto: i32) -> Result<Option<Producto>, DbErr> {
        let row = producto::Entity::find_by_id(id_producto)
            .find_also_related(categoria::Entity)
            .one(self.base.db())
            .await?;

        Ok(row.map(Producto::from))
    }

    /// Insert when the key is unset or unknown, otherwise overwrite the
    /// stored row. Returns the stored record re-read with its categoria.
    ///
    /// An unknown key is not reused: the database assigns a fresh one.
    pub async fn save(&self, producto: Producto) -> Result<Producto, DbErr> {
        let exists = match producto.id_producto {
            Some(id) => self.base.exists(id).await?,
            None => false,
        };

        let stored = if exists {
            self.base.update(producto.into_active_model(true)).await?
        } else {
            self.base.insert(producto.into_active_model(false)).await?
        };
        tracing::debug!(id_producto = stored.id_producto, updated = exists, "Saved producto");

        self.find_by_id(stored.id_producto).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("producto {} vanished after save", stored.id_producto))
        })
    }

    /// Succeeds whether or not a row matched
    pub async fn delete_by_id(&self, id_producto: i32) -> Result<(), DbErr> {
        let removed = self.base.delete_by_id(id_producto).await?;
        tracing::debug!(id_producto, removed, "Deleted producto");
        Ok(())
    }

    pub async fn find_by_id_categoria_order_by_nombre_asc(
        &self,
        id_categoria: i32,
    ) -> Result<Vec<Producto>, DbErr> {
        let rows = producto::Entity::find()
            .filter(producto::Column::IdCategoria.eq(id_categoria))
            .order_by_asc(producto::Column::Nombre)
            .find_also_related(categoria::Entity)
            .all(self.base.db())
            .await?;

        Ok(rows.into_iter().map(Producto::from).collect())
    }

    /// `None` when no row has `cantidad_stock < cantidad` and the given `estado`
    pub async fn find_by_cantidad_stock_less_than_and_estado(
        &self,
        cantidad: i32,
        estado: bool,
    ) -> Result<Option<Vec<Producto>>, DbErr> {
        let rows = producto::Entity::find()
            .filter(producto::Column::CantidadStock.lt(cantidad))
            .filter(producto::Column::Estado.eq(estado))
            .order_by_asc(producto::Column::IdProducto)
            .find_also_related(categoria::Entity)
            .all(self.base.db())
            .await?;

        if rows.is_empty() {
            return Ok(None);
        }
        Ok(Some(rows.into_iter().map(Producto::from).collect()))
    }
}
