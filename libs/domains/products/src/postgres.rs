use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    crud::ProductoCrudRepository,
    error::ProductResult,
    mapper::ProductMapper,
    models::Product,
    repository::ProductRepository,
};

/// [`ProductRepository`] backed by PostgreSQL
#[derive(Clone)]
pub struct PgProductRepository {
    crud: ProductoCrudRepository,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            crud: ProductoCrudRepository::new(db),
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn get_all(&self) -> ProductResult<Vec<Product>> {
        let productos = self.crud.find_all().await?;
        Ok(ProductMapper::to_products(productos))
    }

    async fn get_by_id(&self, product_id: i32) -> ProductResult<Option<Product>> {
        let producto = self.crud.find_by_id(product_id).await?;
        Ok(producto.map(ProductMapper::to_product))
    }

    async fn get_by_category(&self, category_id: i32) -> ProductResult<Option<Vec<Product>>> {
        let productos = self
            .crud
            .find_by_id_categoria_order_by_nombre_asc(category_id)
            .await?;
        Ok(Some(ProductMapper::to_products(productos)))
    }

    async fn get_scarce_products(&self, quantity: i32) -> ProductResult<Option<Vec<Product>>> {
        let productos = self
            .crud
            .find_by_cantidad_stock_less_than_and_estado(quantity, true)
            .await?;
        Ok(productos.map(ProductMapper::to_products))
    }

    async fn save(&self, product: Product) -> ProductResult<Product> {
        let producto = ProductMapper::to_producto(product);
        let stored = self.crud.save(producto).await?;

        tracing::info!(product_id = ?stored.id_producto, "Saved product");
        Ok(ProductMapper::to_product(stored))
    }

    async fn delete(&self, product_id: i32) -> ProductResult<()> {
        self.crud.delete_by_id(product_id).await?;
        tracing::info!(product_id, "Deleted product");
        Ok(())
    }
}
