//! Product workflow tests against an in-memory product store.
//!
//! The fake store implements the repository contract (case-insensitive
//! substring search, strict quantity threshold, full-replacement update) so
//! the service-level outcomes can be checked without a database.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use inventory_api::domain::{Product, ProductInput};
use inventory_api::errors::AppResult;
use inventory_api::infra::ProductRepository;
use inventory_api::services::{ProductManager, ProductService};

/// In-memory product store
#[derive(Default)]
struct InMemoryProducts {
    rows: Mutex<Vec<Product>>,
}

impl InMemoryProducts {
    fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProducts {
    async fn find_all(&self) -> AppResult<Vec<Product>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn insert(&self, input: ProductInput) -> AppResult<Product> {
        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            price: input.price,
            quantity: input.quantity,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: Uuid, input: ProductInput) -> AppResult<Option<Product>> {
        let mut rows = self.rows.lock().unwrap();
        let Some(product) = rows.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        product.name = input.name;
        product.description = input.description;
        product.price = input.price;
        product.quantity = input.quantity;
        product.updated_at = Utc::now();
        Ok(Some(product.clone()))
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != id);
        Ok(rows.len() < before)
    }

    async fn search_by_name(&self, name: &str) -> AppResult<Vec<Product>> {
        let term = name.to_lowercase();
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&term))
            .cloned()
            .collect())
    }

    async fn quantity_greater_than(&self, min: i32) -> AppResult<Vec<Product>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.quantity > min)
            .cloned()
            .collect())
    }
}

fn widget_input() -> ProductInput {
    ProductInput {
        name: "Widget".to_string(),
        description: "d".to_string(),
        price: Decimal::new(9999, 2),
        quantity: 10,
    }
}

fn service_with_store() -> (ProductManager, Arc<InMemoryProducts>) {
    let store = Arc::new(InMemoryProducts::default());
    (ProductManager::new(store.clone()), store)
}

#[tokio::test]
async fn list_is_empty_not_an_error_on_a_fresh_store() {
    let (service, _) = service_with_store();
    assert!(service.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_then_get_returns_an_equal_product() {
    let (service, _) = service_with_store();

    let created = service.create(widget_input()).await.unwrap();
    let fetched = service.get(created.id).await.unwrap().unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.price, Decimal::new(9999, 2));
}

#[tokio::test]
async fn get_unknown_id_is_none() {
    let (service, _) = service_with_store();
    assert!(service.get(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn update_replaces_every_field_but_preserves_identity() {
    let (service, _) = service_with_store();
    let created = service.create(widget_input()).await.unwrap();

    let replacement = ProductInput {
        name: "Gadget".to_string(),
        description: "improved".to_string(),
        price: Decimal::new(14950, 2),
        quantity: 3,
    };
    let updated = service
        .update(created.id, replacement)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.name, "Gadget");
    assert_eq!(updated.description, "improved");
    assert_eq!(updated.price, Decimal::new(14950, 2));
    assert_eq!(updated.quantity, 3);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn update_unknown_id_is_none_with_no_side_effects() {
    let (service, store) = service_with_store();
    service.create(widget_input()).await.unwrap();

    let result = service.update(Uuid::new_v4(), widget_input()).await.unwrap();
    assert!(result.is_none());
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn delete_reports_true_then_false() {
    let (service, store) = service_with_store();
    let created = service.create(widget_input()).await.unwrap();

    assert!(service.delete(created.id).await.unwrap());
    assert_eq!(store.len(), 0);

    // Nothing left to delete: a normal outcome, not an error
    assert!(!service.delete(created.id).await.unwrap());
    assert_eq!(store.len(), 0);
}

#[tokio::test]
async fn search_matches_substring_case_insensitively() {
    let (service, _) = service_with_store();
    let created = service.create(widget_input()).await.unwrap();

    let hits = service.search_by_name("wid").await.unwrap();
    assert!(hits.iter().any(|p| p.id == created.id));

    let hits = service.search_by_name("WIDGET").await.unwrap();
    assert!(hits.iter().any(|p| p.id == created.id));

    let hits = service.search_by_name("gizmo").await.unwrap();
    assert!(hits.is_empty());
}

#[tokio::test]
async fn empty_search_term_matches_everything() {
    let (service, _) = service_with_store();
    service.create(widget_input()).await.unwrap();

    assert_eq!(service.search_by_name("").await.unwrap().len(), 1);
}

#[tokio::test]
async fn quantity_filter_is_strictly_greater_than() {
    let (service, _) = service_with_store();
    let created = service.create(widget_input()).await.unwrap();

    // quantity == 10: threshold 10 excludes it, 9 includes it
    assert!(service.with_minimum_quantity(10).await.unwrap().is_empty());

    let hits = service.with_minimum_quantity(9).await.unwrap();
    assert!(hits.iter().any(|p| p.id == created.id));
}
