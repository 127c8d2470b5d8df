//! Request types, REST services and the metadata the scanner reads from them
//!
//! # Data Flow
//!
//! ```text
//! #[derive(RequestDto)] struct Order      → RequestDto (type name, field names)
//! #[rest_service] impl RestService for .. → declared_hooks(), service_name()
//!     → RestService::type_info()           (service extends RestServiceBase<Order>)
//!     → ServiceModule                      (what a scan walks)
//!     → ServiceRoutesExt::add_from_modules (routes)
//! ```
//!
//! The hooks a service writes in its `impl` block decide which verbs its routes
//! accept. `#[rest_service]` records them at compile time; a hand-written impl
//! can list them in `declared_hooks()` instead.

pub mod module;
pub mod type_info;

pub use module::ServiceModule;
pub use type_info::TypeInfo;

use crate::http::{ApplyTo, HttpMethod};
use crate::routes::RequestType;

/// Name of the open generic every scannable service derives from
pub const REST_SERVICE_BASE: &str = "RestServiceBase";

/// Handler hook method names
pub mod hooks {
    use crate::http::HttpMethod;

    pub const ON_GET: &str = "on_get";
    pub const ON_POST: &str = "on_post";
    pub const ON_PUT: &str = "on_put";
    pub const ON_DELETE: &str = "on_delete";
    pub const ON_PATCH: &str = "on_patch";

    /// Hook names paired with the verb each one serves, in canonical verb order
    pub const ALL: [(&str, HttpMethod); 5] = [
        (ON_GET, HttpMethod::GET),
        (ON_POST, HttpMethod::POST),
        (ON_PUT, HttpMethod::PUT),
        (ON_DELETE, HttpMethod::DELETE),
        (ON_PATCH, HttpMethod::PATCH),
    ];
}

/// Result returned by handler hooks
pub type ServiceResult = Result<serde_json::Value, ServiceError>;

/// Errors raised by handler hooks
#[derive(thiserror::Error, Debug)]
pub enum ServiceError {
    /// The service does not implement a hook for this verb
    #[error("{service} does not handle {verb}")]
    NotImplemented { service: &'static str, verb: HttpMethod },
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// A request/message type that services are bound to
///
/// Usually derived with `#[derive(RequestDto)]`.
pub trait RequestDto: 'static {
    /// Simple type name, used as the request type identifier
    fn type_name() -> &'static str;

    /// Names of the properties the request exposes
    fn field_names() -> &'static [&'static str];

    fn type_info() -> TypeInfo {
        TypeInfo::new(Self::type_name()).with_properties(Self::field_names().iter().copied())
    }

    fn request_type() -> RequestType {
        RequestType::new(Self::type_name())
    }
}

/// A service handling exactly one request type
///
/// Only hooks listed in [`declared_hooks`](RestService::declared_hooks) turn
/// into allowed verbs. Annotate the impl with `#[rest_service]` to have that
/// list generated from the hooks actually written in the block.
pub trait RestService: Send + Sync + 'static {
    type Request: RequestDto;

    fn service_name() -> &'static str
    where
        Self: Sized;

    fn declared_hooks() -> &'static [&'static str]
    where
        Self: Sized,
    {
        &[]
    }

    fn on_get(&self, _request: &Self::Request) -> ServiceResult {
        Err(self.not_implemented(HttpMethod::GET))
    }

    fn on_post(&self, _request: &Self::Request) -> ServiceResult {
        Err(self.not_implemented(HttpMethod::POST))
    }

    fn on_put(&self, _request: &Self::Request) -> ServiceResult {
        Err(self.not_implemented(HttpMethod::PUT))
    }

    fn on_delete(&self, _request: &Self::Request) -> ServiceResult {
        Err(self.not_implemented(HttpMethod::DELETE))
    }

    fn on_patch(&self, _request: &Self::Request) -> ServiceResult {
        Err(self.not_implemented(HttpMethod::PATCH))
    }

    #[doc(hidden)]
    fn not_implemented(&self, verb: HttpMethod) -> ServiceError {
        ServiceError::NotImplemented { service: std::any::type_name::<Self>(), verb }
    }

    /// Describe this service as a direct subclass of `RestServiceBase<Request>`
    fn type_info() -> TypeInfo
    where
        Self: Sized,
    {
        TypeInfo::new(Self::service_name())
            .extends(TypeInfo::generic(REST_SERVICE_BASE, vec![Self::Request::type_info()]))
            .declares_all(Self::declared_hooks().iter().copied())
    }
}

/// Verbs served by a set of hook names; unknown names are ignored
pub fn supported_verbs<S: AsRef<str>>(declared: &[S]) -> ApplyTo {
    hooks::ALL
        .iter()
        .filter(|(hook, _)| declared.iter().any(|d| d.as_ref() == *hook))
        .map(|(_, verb)| *verb)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ping;

    impl RequestDto for Ping {
        fn type_name() -> &'static str {
            "Ping"
        }

        fn field_names() -> &'static [&'static str] {
            &["id", "payload"]
        }
    }

    struct PingService;

    impl RestService for PingService {
        type Request = Ping;

        fn service_name() -> &'static str {
            "PingService"
        }

        fn declared_hooks() -> &'static [&'static str] {
            &[hooks::ON_GET]
        }

        fn on_get(&self, _request: &Ping) -> ServiceResult {
            Ok(serde_json::json!({ "pong": true }))
        }
    }

    #[test]
    fn test_type_info_links_request_type() {
        let info = PingService::type_info();
        assert_eq!(info.name(), "PingService");
        assert!(info.declares_method("on_get"));
        assert!(!info.declares_method("on_post"));

        let base = info.first_generic_base().unwrap();
        assert_eq!(base.generic_type_definition(), REST_SERVICE_BASE);
        let request = &base.generic_arguments()[0];
        assert_eq!(request.name(), "Ping");
        assert!(request.has_property("id"));
    }

    #[test]
    fn test_default_hooks_report_not_implemented() {
        let service = PingService;
        assert!(service.on_get(&Ping).is_ok());

        match service.on_delete(&Ping) {
            Err(ServiceError::NotImplemented { verb, .. }) => assert_eq!(verb, HttpMethod::DELETE),
            other => panic!("expected NotImplemented, got {:?}", other),
        }
    }

    #[test]
    fn test_supported_verbs_ignores_unknown_names() {
        let verbs = supported_verbs(&["on_patch", "on_get", "helper"]);
        assert_eq!(verbs, ApplyTo::GET | ApplyTo::PATCH);
        assert!(supported_verbs::<&str>(&[]).is_empty());
    }
}
