use cucumber::World;
use restroute_core::prelude::*;
use restroute_core::service::REST_SERVICE_BASE;
use std::collections::HashMap;

/// Scenario state: declared types, the modules built from them, and the table
#[derive(Debug, Default, World)]
pub struct RouteWorld {
    pub table: RouteTable,
    pub requests: HashMap<String, TypeInfo>,
    pub services: Vec<TypeInfo>,
    pub modules: Vec<ServiceModule>,
    pub options: InferenceOptions,
    pub last_error: Option<RouteError>,
}

impl RouteWorld {
    pub fn request(&self, name: &str) -> TypeInfo {
        self.requests
            .get(name)
            .cloned()
            .unwrap_or_else(|| TypeInfo::new(name))
    }

    pub fn service(&self, name: &str) -> TypeInfo {
        self.services
            .iter()
            .find(|s| s.name() == name)
            .cloned()
            .unwrap_or_else(|| panic!("service {name} was not declared"))
    }

    pub fn service_base(&self, request: &str) -> TypeInfo {
        TypeInfo::generic(REST_SERVICE_BASE, vec![self.request(request)])
    }

    /// Services declared in steps, gathered into one module
    pub fn scenario_module(&self) -> ServiceModule {
        self.services
            .iter()
            .cloned()
            .fold(ServiceModule::new("scenario"), ServiceModule::with_type)
    }

    pub fn record<T>(&mut self, result: RouteResult<T>) {
        self.last_error = result.err();
    }
}

/// Split `"on_get, on_post"` into names; an empty string gives none
pub fn list(items: &str) -> Vec<String> {
    items
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn error_kind(err: &RouteError) -> &'static str {
    match err {
        RouteError::MissingRequestType { .. } => "MissingRequestType",
        RouteError::FormatMismatch { .. } => "FormatMismatch",
        RouteError::MalformedTemplate { .. } => "MalformedTemplate",
        RouteError::UnsupportedExpression { .. } => "UnsupportedExpression",
        RouteError::InvalidSelector { .. } => "InvalidSelector",
        RouteError::UnknownProperty { .. } => "UnknownProperty",
        RouteError::UnsupportedMethod(_) => "UnsupportedMethod",
    }
}
