//! Product service - inventory CRUD and filtered queries.
//!
//! Each operation is a single store call; absence is an outcome (`None` /
//! `false`), not an error. The handler layer decides how absence maps to
//! HTTP.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Product, ProductInput};
use crate::errors::AppResult;
use crate::infra::ProductRepository;

/// Product service trait for dependency injection.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// List all products; empty when the store is empty
    async fn list(&self) -> AppResult<Vec<Product>>;

    /// Get a product by id
    async fn get(&self, id: Uuid) -> AppResult<Option<Product>>;

    /// Create a product with a fresh identifier
    async fn create(&self, input: ProductInput) -> AppResult<Product>;

    /// Replace all mutable fields of an existing product
    async fn update(&self, id: Uuid, input: ProductInput) -> AppResult<Option<Product>>;

    /// Delete a product; false when nothing existed to delete
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Case-insensitive substring search on name
    async fn search_by_name(&self, name: &str) -> AppResult<Vec<Product>>;

    /// Products with quantity strictly greater than the threshold
    async fn with_minimum_quantity(&self, min: i32) -> AppResult<Vec<Product>>;
}

/// Concrete implementation of ProductService.
pub struct ProductManager {
    products: Arc<dyn ProductRepository>,
}

impl ProductManager {
    /// Create new product service instance
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl ProductService for ProductManager {
    async fn list(&self) -> AppResult<Vec<Product>> {
        self.products.find_all().await
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<Product>> {
        self.products.find_by_id(id).await
    }

    async fn create(&self, input: ProductInput) -> AppResult<Product> {
        self.products.insert(input).await
    }

    async fn update(&self, id: Uuid, input: ProductInput) -> AppResult<Option<Product>> {
        self.products.update(id, input).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        self.products.delete_by_id(id).await
    }

    async fn search_by_name(&self, name: &str) -> AppResult<Vec<Product>> {
        self.products.search_by_name(name).await
    }

    async fn with_minimum_quantity(&self, min: i32) -> AppResult<Vec<Product>> {
        self.products.quantity_greater_than(min).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockProductRepository;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn widget(id: Uuid) -> Product {
        let now = Utc::now();
        Product {
            id,
            name: "Widget".to_string(),
            description: "A standard widget".to_string(),
            price: Decimal::new(9999, 2),
            quantity: 10,
            created_at: now,
            updated_at: now,
        }
    }

    fn input() -> ProductInput {
        ProductInput {
            name: "Widget".to_string(),
            description: "A standard widget".to_string(),
            price: Decimal::new(9999, 2),
            quantity: 10,
        }
    }

    #[tokio::test]
    async fn list_returns_whatever_the_store_holds() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_all()
            .returning(|| Ok(vec![widget(Uuid::new_v4()), widget(Uuid::new_v4())]));

        let service = ProductManager::new(Arc::new(repo));
        assert_eq!(service.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn get_passes_absence_through_as_none() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = ProductManager::new(Arc::new(repo));
        assert!(service.get(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn create_forwards_the_full_input() {
        let mut repo = MockProductRepository::new();
        let expected = input();
        repo.expect_insert()
            .withf(move |i| *i == expected)
            .returning(|i| {
                let now = Utc::now();
                Ok(Product {
                    id: Uuid::new_v4(),
                    name: i.name,
                    description: i.description,
                    price: i.price,
                    quantity: i.quantity,
                    created_at: now,
                    updated_at: now,
                })
            });

        let service = ProductManager::new(Arc::new(repo));
        let product = service.create(input()).await.unwrap();
        assert_eq!(product.name, "Widget");
        assert_eq!(product.quantity, 10);
    }

    #[tokio::test]
    async fn update_on_missing_id_is_none() {
        let mut repo = MockProductRepository::new();
        repo.expect_update().returning(|_, _| Ok(None));

        let service = ProductManager::new(Arc::new(repo));
        assert!(service
            .update(Uuid::new_v4(), input())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn delete_reports_whether_anything_was_removed() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete_by_id().returning(|_| Ok(false));

        let service = ProductManager::new(Arc::new(repo));
        assert!(!service.delete(Uuid::new_v4()).await.unwrap());
    }

    #[tokio::test]
    async fn search_forwards_the_term() {
        let mut repo = MockProductRepository::new();
        repo.expect_search_by_name()
            .withf(|term| term == "wid")
            .returning(|_| Ok(vec![widget(Uuid::new_v4())]));

        let service = ProductManager::new(Arc::new(repo));
        assert_eq!(service.search_by_name("wid").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn minimum_quantity_forwards_the_threshold() {
        let mut repo = MockProductRepository::new();
        repo.expect_quantity_greater_than()
            .withf(|min| *min == 9)
            .returning(|_| Ok(vec![widget(Uuid::new_v4())]));

        let service = ProductManager::new(Arc::new(repo));
        assert_eq!(service.with_minimum_quantity(9).await.unwrap().len(), 1);
    }
}
