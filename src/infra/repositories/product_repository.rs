//! Product repository implementation.

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::entities::product::{self, ActiveModel, Entity as ProductEntity};
use crate::domain::{Product, ProductInput};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product repository trait for dependency injection.
///
/// Absent rows are reported as `None`/`false`, never as errors; callers decide
/// what absence means at their own boundary.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fetch all products (unordered)
    async fn find_all(&self) -> AppResult<Vec<Product>>;

    /// Find product by id
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>>;

    /// Insert a new product with a fresh identifier and both timestamps set
    async fn insert(&self, input: ProductInput) -> AppResult<Product>;

    /// Replace all mutable fields of an existing product.
    ///
    /// Returns `None` without side effects when the id is unknown. The
    /// identifier and `created_at` are never touched; `updated_at` is
    /// refreshed.
    async fn update(&self, id: Uuid, input: ProductInput) -> AppResult<Option<Product>>;

    /// Delete by id; true when a row was removed
    async fn delete_by_id(&self, id: Uuid) -> AppResult<bool>;

    /// Case-insensitive substring match on name; empty term matches all
    async fn search_by_name(&self, name: &str) -> AppResult<Vec<Product>>;

    /// Products with quantity strictly greater than the threshold
    async fn quantity_greater_than(&self, min: i32) -> AppResult<Vec<Product>>;
}

/// Concrete implementation of ProductRepository
pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Escape LIKE wildcards so user input matches literally.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn find_all(&self) -> AppResult<Vec<Product>> {
        let models = ProductEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        let result = ProductEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Product::from))
    }

    async fn insert(&self, input: ProductInput) -> AppResult<Product> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            description: Set(input.description),
            price: Set(input.price),
            quantity: Set(input.quantity),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Product::from(model))
    }

    async fn update(&self, id: Uuid, input: ProductInput) -> AppResult<Option<Product>> {
        let existing = ProductEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        // Full replacement: every mutable field is overwritten; id and
        // created_at stay untouched.
        let mut active: ActiveModel = existing.into();
        active.name = Set(input.name);
        active.description = Set(input.description);
        active.price = Set(input.price);
        active.quantity = Set(input.quantity);
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Some(Product::from(model)))
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<bool> {
        let result = ProductEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }

    async fn search_by_name(&self, name: &str) -> AppResult<Vec<Product>> {
        let pattern = format!("%{}%", escape_like(name));
        let models = ProductEntity::find()
            .filter(Expr::col(product::Column::Name).ilike(pattern))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn quantity_greater_than(&self, min: i32) -> AppResult<Vec<Product>> {
        let models = ProductEntity::find()
            .filter(product::Column::Quantity.gt(min))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Product::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_leaves_plain_terms_alone() {
        assert_eq!(escape_like("widget"), "widget");
    }

    #[test]
    fn escape_like_escapes_wildcards() {
        assert_eq!(escape_like("100%_wool"), "100\\%\\_wool");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }
}
