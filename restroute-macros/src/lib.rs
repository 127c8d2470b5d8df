//! Procedural macros for restroute
//!
//! This crate provides the macro implementations that generate the metadata
//! route inference reads: request type names and fields, service names, and
//! the handler hooks each service actually writes.

use proc_macro::TokenStream;

mod request_dto;
mod rest_service;

/// Derive macro for request types
///
/// Generates a `restroute_core::service::RequestDto` implementation:
/// - `type_name()` - the struct name, or `#[request(name = "...")]`
/// - `field_names()` - every named field except those marked `#[request(skip)]`
///
/// # Example
///
/// ```rust,ignore
/// use restroute_core::prelude::*;
///
/// #[derive(RequestDto)]
/// #[request(name = "Booking")]
/// struct BookingRequest {
///     id: u64,
///     user_id: String,
///     #[request(skip)]
///     trace: Option<String>,
/// }
/// ```
#[proc_macro_derive(RequestDto, attributes(request))]
pub fn derive_request_dto(input: TokenStream) -> TokenStream {
    request_dto::derive_request_dto(input.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Attribute macro for `impl RestService for ...` blocks
///
/// Records which of `on_get`, `on_post`, `on_put`, `on_delete` and `on_patch`
/// the block defines as `declared_hooks()`, so the routes registered for the
/// service accept exactly those verbs. Also adds `service_name()` from the
/// implementing type's name unless the block already has one.
///
/// # Example
///
/// ```rust,ignore
/// struct Bookings;
///
/// #[rest_service]
/// impl RestService for Bookings {
///     type Request = BookingRequest;
///
///     fn on_get(&self, request: &BookingRequest) -> ServiceResult {
///         Ok(serde_json::json!({ "id": request.id }))
///     }
/// }
///
/// // Bookings and Bookings/{id}, GET only
/// ```
///
/// `#[rest_service(name = "Reservations")]` overrides the service name.
#[proc_macro_attribute]
pub fn rest_service(attr: TokenStream, item: TokenStream) -> TokenStream {
    rest_service::rest_service_impl(attr.into(), item.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
