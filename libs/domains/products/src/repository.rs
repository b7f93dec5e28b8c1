use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{Category, Product};

/// Product persistence, independent of the storage technology
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> ProductResult<Vec<Product>>;

    async fn get_by_id(&self, product_id: i32) -> ProductResult<Option<Product>>;

    /// Products of one category, sorted by name.
    ///
    /// Always `Some`; an unknown category yields `Some(vec![])`.
    async fn get_by_category(&self, category_id: i32) -> ProductResult<Option<Vec<Product>>>;

    /// Active products with `stock < quantity`; `None` when there are none
    async fn get_scarce_products(&self, quantity: i32) -> ProductResult<Option<Vec<Product>>>;

    /// Insert or overwrite, returning the stored product with its category
    async fn save(&self, product: Product) -> ProductResult<Product>;

    /// No error when the product does not exist
    async fn delete(&self, product_id: i32) -> ProductResult<()>;
}

#[derive(Debug, Default)]
struct Store {
    products: HashMap<i32, Product>,
    categories: HashMap<i32, Category>,
    last_id: i32,
}

impl Store {
    fn joined(&self, product: &Product) -> Product {
        Product {
            category: self.categories.get(&product.category_id).cloned(),
            ..product.clone()
        }
    }
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Categories that saved products are joined with
    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let store = Store {
            categories: categories
                .into_iter()
                .map(|c| (c.category_id, c))
                .collect(),
            ..Store::default()
        };
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_all(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        let mut products: Vec<Product> = store.products.values().map(|p| store.joined(p)).collect();
        products.sort_by_key(|p| p.product_id);
        Ok(products)
    }

    async fn get_by_id(&self, product_id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&product_id).map(|p| store.joined(p)))
    }

    async fn get_by_category(&self, category_id: i32) -> ProductResult<Option<Vec<Product>>> {
        let store = self.store.read().await;
        let mut products: Vec<Product> = store
            .products
            .values()
            .filter(|p| p.category_id == category_id)
            .map(|p| store.joined(p))
            .collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(Some(products))
    }

    async fn get_scarce_products(&self, quantity: i32) -> ProductResult<Option<Vec<Product>>> {
        let store = self.store.read().await;
        let mut products: Vec<Product> = store
            .products
            .values()
            .filter(|p| p.active && p.stock < quantity)
            .map(|p| store.joined(p))
            .collect();

        if products.is_empty() {
            return Ok(None);
        }
        products.sort_by_key(|p| p.product_id);
        Ok(Some(products))
    }

    async fn save(&self, product: Product) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        let id = match product.product_id {
            Some(id) if store.products.contains_key(&id) => id,
            _ => {
                store.last_id += 1;
                store.last_id
            }
        };

        let stored = Product {
            product_id: Some(id),
            category: None,
            ..product
        };
        store.products.insert(id, stored.clone());

        tracing::info!(product_id = id, "Saved product");
        Ok(store.joined(&stored))
    }

    async fn delete(&self, product_id: i32) -> ProductResult<()> {
        let mut store = self.store.write().await;
        if store.products.remove(&product_id).is_some() {
            tracing::info!(product_id, "Deleted product");
        }
        Ok(())
    }
}
