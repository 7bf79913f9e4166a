//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion; collaborators are injected at construction.

mod auth_service;
mod product_service;

pub use auth_service::{AuthResponse, AuthService, Authenticator, Claims};
pub use product_service::{ProductManager, ProductService};
