//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use restroute_core::prelude::*;
//! ```

// === Derive macros (from restroute-macros) ===
#[cfg(feature = "macros")]
pub use restroute_macros::{rest_service, RequestDto};

// === Selector macros ===
pub use crate::{field, selector};

// === Services ===
pub use crate::service::hooks;
pub use crate::service::RequestDto;
pub use crate::service::RestService;
pub use crate::service::ServiceError;
pub use crate::service::ServiceModule;
pub use crate::service::ServiceResult;
pub use crate::service::TypeInfo;

// === Routes ===
pub use crate::routes::InferenceOptions;
pub use crate::routes::RequestType;
pub use crate::routes::RouteTable;
pub use crate::routes::Selector;
pub use crate::routes::ServiceRoutes;
pub use crate::routes::ServiceRoutesExt;

// === HTTP ===
pub use crate::http::ApplyTo;
pub use crate::http::HttpMethod;

// === Configuration ===
pub use crate::config::RestRouteConfig;

// === Errors ===
pub use crate::error::{RouteError, RouteResult};
