use std::sync::Arc;
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::Product;
use crate::repository::ProductRepository;

/// Business operations on products
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> ProductResult<Vec<Product>> {
        self.repository.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, product_id: i32) -> ProductResult<Option<Product>> {
        self.repository.get_by_id(product_id).await
    }

    #[instrument(skip(self))]
    pub async fn get_by_category(&self, category_id: i32) -> ProductResult<Option<Vec<Product>>> {
        self.repository.get_by_category(category_id).await
    }

    #[instrument(skip(self))]
    pub async fn get_scarce_products(&self, quantity: i32) -> ProductResult<Option<Vec<Product>>> {
        self.repository.get_scarce_products(quantity).await
    }

    #[instrument(skip(self, product), fields(product_id = ?product.product_id))]
    pub async fn save(&self, product: Product) -> ProductResult<Product> {
        self.repository.save(product).await
    }

    /// Delete if present. `false` when there was nothing to delete.
    ///
    /// Not atomic: a concurrent delete between the lookup and the removal
    /// still reports `true` here.
    #[instrument(skip(self))]
    pub async fn delete(&self, product_id: i32) -> ProductResult<bool> {
        if self.repository.get_by_id(product_id).await?.is_none() {
            return Ok(false);
        }

        self.repository.delete(product_id).await?;
        Ok(true)
    }
}
