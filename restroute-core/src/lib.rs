//! restroute - Core
//!
//! Convention-based REST route registration: describe request types and the
//! services that handle them, and restroute fills a route table with the
//! paths and verbs a router needs.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use restroute_core::prelude::*;
//!
//! #[derive(RequestDto)]
//! struct Order {
//!     id: u64,
//!     customer: String,
//! }
//!
//! struct Orders;
//!
//! #[rest_service]
//! impl RestService for Orders {
//!     type Request = Order;
//!
//!     fn on_get(&self, request: &Order) -> ServiceResult {
//!         Ok(serde_json::json!({ "id": request.id }))
//!     }
//!
//!     fn on_post(&self, _request: &Order) -> ServiceResult {
//!         Ok(serde_json::Value::Null)
//!     }
//! }
//!
//! let mut routes = RouteTable::new();
//! routes.add_from_modules(&[ServiceModule::new("shop").with_service::<Orders>()])?;
//! // Orders       GET POST -> Order
//! // Orders/{id}  GET POST -> Order
//! ```
//!
//! # Architecture
//!
//! - [`http`] - HTTP methods and [`ApplyTo`](http::ApplyTo) verb flags
//! - [`service`] - request types, REST services and their scan metadata
//! - [`routes`] - the registry trait, the route table and registration helpers
//! - [`config`] - TOML and environment configuration
//! - [`logging`] - logger initialisation

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod routes;
pub mod service;

mod macros;

pub mod prelude;

#[cfg(feature = "macros")]
pub use restroute_macros::{rest_service, RequestDto};

pub use error::{RouteError, RouteResult};
pub use http::{ApplyTo, HttpMethod};
pub use routes::{RequestType, RestPath, RouteTable, Selector, ServiceRoutes, ServiceRoutesExt};
pub use service::{RequestDto, RestService, ServiceError, ServiceModule, ServiceResult, TypeInfo};
