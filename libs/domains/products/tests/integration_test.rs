//! PostgreSQL integration tests for the Products domain
//!
//! These run the sea-orm repository against a real Postgres container with the
//! workspace migrations applied. They need Docker:
//!
//! ```sh
//! cargo test -p domain_products --test integration_test -- --ignored
//! ```

use domain_products::models::NewProduct;
use domain_products::*;
use test_utils::{TestDataBuilder, TestDatabase};

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_seeded_products_are_listed_in_id_order() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let products = repo.list().await.unwrap();
    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Product 1", "Product 2", "Product 3"]);
    assert_eq!(products[2].price, 300.0);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_assigns_id_and_round_trips() {
    let db = TestDatabase::empty().await;
    let service = ProductService::new(PgProductRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("pg_create");

    let created = service
        .create_product(CreateProduct {
            name: Some(builder.name("product", "main")),
            description: Some("integration".into()),
            price: Some(builder.price()),
        })
        .await
        .unwrap();

    assert_eq!(created.id, 1);

    let fetched = service.get_product(created.id).await.unwrap();
    assert_eq!(fetched.name, builder.name("product", "main"));
    assert_eq!(fetched.price, builder.price());
    assert_eq!(fetched.description.as_deref(), Some("integration"));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_keeps_existing_values_for_falsy_fields() {
    let db = TestDatabase::empty().await;
    let repo = PgProductRepository::new(db.connection());

    let created = repo
        .create(NewProduct {
            name: "Widget".into(),
            description: Some("original".into()),
            price: 9.99,
        })
        .await
        .unwrap();

    let updated = repo
        .update(
            created.id,
            UpdateProduct {
                name: Some("Widget v2".into()),
                description: Some(String::new()),
                price: Some(0.0),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Widget v2");
    assert_eq!(updated.description.as_deref(), Some("original"));
    assert_eq!(updated.price, 9.99);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_delete_removes_row() {
    let db = TestDatabase::new().await;
    let service = ProductService::new(PgProductRepository::new(db.connection()));

    service.delete_product(2).await.unwrap();

    assert!(matches!(
        service.get_product(2).await,
        Err(ProductError::NotFound(2))
    ));
    assert!(matches!(
        service.delete_product(2).await,
        Err(ProductError::NotFound(2))
    ));

    let ids: Vec<i32> = service
        .list_products()
        .await
        .unwrap()
        .iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![1, 3]);
}
