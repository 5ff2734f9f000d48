//! Users Domain
//!
//! CRUD over a directory of [`User`] records.
//!
//! ```text
//! handlers   HTTP routes, OpenAPI
//!    │
//! service    validation, id policy, update/delete rules
//!    │
//! repository UserRepository trait
//!    ├── InMemoryUserRepository   (Vec behind a RwLock)
//!    └── PgUserRepository         (SeaORM, `users` table)
//! ```
//!
//! ```rust,no_run
//! use domain_users::{handlers, InMemoryUserRepository, UserService};
//!
//! let service = UserService::new(InMemoryUserRepository::new());
//! let users = handlers::router(service, "/api/users");
//! let app = axum::Router::new().nest("/api/users", users);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{UserError, UserResult};
pub use models::{CreateUser, IdPolicy, UpdateUser, User};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
