//! Integration tests for the products domain
//!
//! Real PostgreSQL via testcontainers, schema from the `migration` crate.
//! Ignored by default because they need Docker:
//! `cargo test -p domain_products -- --ignored`

use domain_products::*;
use rust_decimal::Decimal;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

fn new_product(name: String, category_id: i32, stock: i32, active: bool) -> Product {
    Product {
        product_id: None,
        name,
        category_id,
        price: Decimal::new(1999, 2),
        stock,
        active,
        category: None,
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_save_and_get_by_id_with_category() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("save_and_get");
    let category_id = db.seed_category("Lácteos", true).await;
    let repo = PgProductRepository::new(db.connection());

    let saved = repo
        .save(new_product(builder.name("product", "main"), category_id, 12, true))
        .await
        .unwrap();
    let id = assert_some(saved.product_id, "saved product id");

    let fetched = assert_some(repo.get_by_id(id).await.unwrap(), "product should exist");
    assert_eq!(fetched.name, builder.name("product", "main"));
    assert_eq!(fetched.price, Decimal::new(1999, 2));
    assert_eq!(
        fetched.category,
        Some(Category {
            category_id,
            category: "Lácteos".to_string(),
            active: true,
        })
    );
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_save_with_known_id_updates_in_place() {
    let db = TestDatabase::new().await;
    let category_id = db.seed_category("Panadería", true).await;
    let repo = PgProductRepository::new(db.connection());

    let saved = repo
        .save(new_product("Pan".to_string(), category_id, 5, true))
        .await
        .unwrap();

    let updated = repo
        .save(Product {
            stock: 50,
            ..saved.clone()
        })
        .await
        .unwrap();

    assert_eq!(updated.product_id, saved.product_id);
    assert_eq!(updated.stock, 50);
    assert_eq!(repo.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_get_by_category_orders_by_name() {
    let db = TestDatabase::new().await;
    let frutas = db.seed_category("Frutas", true).await;
    let otras = db.seed_category("Otras", true).await;
    let repo = PgProductRepository::new(db.connection());

    for name in ["Pera", "Banano", "Manzana"] {
        repo.save(new_product(name.to_string(), frutas, 10, true))
            .await
            .unwrap();
    }
    repo.save(new_product("Escoba".to_string(), otras, 10, true))
        .await
        .unwrap();

    let products = assert_some(repo.get_by_category(frutas).await.unwrap(), "category");
    assert_sorted_by(&products, |p| p.name.clone(), "category listing");
    assert_eq!(products.len(), 3);

    assert_eq!(repo.get_by_category(9999).await.unwrap(), Some(vec![]));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_scarce_products_and_delete() {
    let db = TestDatabase::new().await;
    let category_id = db.seed_category("Bebidas", true).await;
    let repo = PgProductRepository::new(db.connection());

    let low = repo
        .save(new_product("Soda".to_string(), category_id, 3, true))
        .await
        .unwrap();
    repo.save(new_product("Agua".to_string(), category_id, 10, true))
        .await
        .unwrap();
    repo.save(new_product("Jugo".to_string(), category_id, 4, false))
        .await
        .unwrap();

    let scarce = assert_some(repo.get_scarce_products(5).await.unwrap(), "scarce");
    assert_eq!(scarce.len(), 1);
    assert_eq!(scarce[0].product_id, low.product_id);
    assert_eq!(repo.get_scarce_products(1).await.unwrap(), None);

    let service = ProductService::new(repo);
    let id = assert_some(low.product_id, "id");
    assert!(service.delete(id).await.unwrap());
    assert!(!service.delete(id).await.unwrap());
    assert!(service.get_by_id(id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_save_with_unknown_category_fails() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let result = repo
        .save(new_product("Huérfano".to_string(), 424242, 1, true))
        .await;

    assert!(matches!(result, Err(ProductError::Database(_))));
}
