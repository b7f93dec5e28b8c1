//! Products Domain
//!
//! Inventory of a supermarket: products grouped into categories.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints under /products
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← delete-if-exists, passthrough reads and saves
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← ProductRepository trait, Postgres and in-memory adapters
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Mapper/Crud │  ← storage records (productos, categorias) ⇄ Product, Category
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, InMemoryProductRepository, ProductService};
//!
//! let service = ProductService::new(InMemoryProductRepository::new());
//! let router = handlers::router(service);
//! ```

pub mod crud;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use crud::ProductoCrudRepository;
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use mapper::{CategoryMapper, ProductMapper};
pub use models::{Category, Product};
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
