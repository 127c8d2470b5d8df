//! Registration helpers layered over any [`ServiceRoutes`] registry
//!
//! # Responsibilities
//! - Scan service modules and infer paths and verbs by convention
//! - Translate [`ApplyTo`] flags into the canonical verb string
//! - Build path templates from property selectors
//!
//! # Conventions
//! - Collection route: the service's simple name, e.g. `Orders`
//! - Detail route: `Orders/{id}` when the request type has the id property
//! - Verbs: one per hook the service declares itself, in canonical order
//! - A service declaring no hooks gets no route

use crate::config::InferenceConfig;
use crate::error::{RouteError, RouteResult};
use crate::http::ApplyTo;
use crate::service::{supported_verbs, RequestDto, ServiceModule, TypeInfo, REST_SERVICE_BASE};

use super::template::{self, Selector};
use super::{RequestType, ServiceRoutes};

/// Knobs for convention-based scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceOptions {
    /// Property that marks a request type as addressable per resource
    pub id_field: String,
    /// Fail on services without a request type instead of skipping them
    pub strict: bool,
    /// Open generic that scannable services derive from
    pub rest_service_base: String,
}

impl Default for InferenceOptions {
    fn default() -> Self {
        Self {
            id_field: "id".to_string(),
            strict: true,
            rest_service_base: REST_SERVICE_BASE.to_string(),
        }
    }
}

impl From<&InferenceConfig> for InferenceOptions {
    fn from(config: &InferenceConfig) -> Self {
        Self {
            id_field: config.id_field.clone(),
            strict: config.strict,
            rest_service_base: config.rest_service_base.clone(),
        }
    }
}

/// Request type carried by the first generic ancestor of `service`
fn request_type_of(service: &TypeInfo) -> RouteResult<&TypeInfo> {
    service
        .first_generic_base()
        .and_then(|base| base.generic_arguments().first())
        .ok_or_else(|| RouteError::MissingRequestType { service: service.name().to_string() })
}

/// Verbs for the hooks declared directly on `service`
fn declared_verbs(service: &TypeInfo) -> ApplyTo {
    supported_verbs(service.declared_methods())
}

struct PlannedRoute {
    request_type: RequestType,
    path: String,
    verbs: String,
}

fn plan_routes(
    modules: &[ServiceModule],
    options: &InferenceOptions,
) -> RouteResult<Vec<PlannedRoute>> {
    let mut planned = Vec::new();

    for module in modules {
        let services = module
            .exported_types()
            .filter(|t| t.is_subclass_of_raw_generic(&options.rest_service_base));

        for service in services {
            let request = match request_type_of(service) {
                Ok(request) => request,
                Err(err) if !options.strict => {
                    log::warn!("Skipping {} in module {}: {}", service.name(), module.name(), err);
                    continue;
                }
                Err(err) => return Err(err),
            };

            let verbs = declared_verbs(service);
            if verbs.is_empty() {
                log::debug!("Skipping {}: no handler hooks declared", service.name());
                continue;
            }
            let verbs = verbs.to_verbs_string();

            planned.push(PlannedRoute {
                request_type: RequestType::new(request.name()),
                path: service.name().to_string(),
                verbs: verbs.clone(),
            });

            if request.has_property(&options.id_field) {
                planned.push(PlannedRoute {
                    request_type: RequestType::new(request.name()),
                    path: format!("{}/{{{}}}", service.name(), options.id_field),
                    verbs,
                });
            }
        }
    }

    Ok(planned)
}

/// Convenience registration on top of [`ServiceRoutes::add`]
pub trait ServiceRoutesExt: ServiceRoutes + Sized {
    /// Scan `modules` and register inferred routes with default options
    fn add_from_modules(&mut self, modules: &[ServiceModule]) -> RouteResult<&mut Self> {
        self.add_from_modules_with(modules, &InferenceOptions::default())
    }

    /// Scan `modules` and register inferred routes
    ///
    /// Every module is inspected before the registry is touched, so an error
    /// leaves it unchanged.
    fn add_from_modules_with(
        &mut self,
        modules: &[ServiceModule],
        options: &InferenceOptions,
    ) -> RouteResult<&mut Self> {
        let planned = plan_routes(modules, options)?;

        log::info!(
            "Inferred {} route(s) from {} module(s)",
            planned.len(),
            modules.len()
        );

        for route in planned {
            self.add(route.request_type, &route.path, &route.verbs, None);
        }
        Ok(self)
    }

    fn add_verbs(
        &mut self,
        request_type: RequestType,
        rest_path: &str,
        verbs: ApplyTo,
        default_content_type: Option<&str>,
    ) -> &mut Self {
        self.add(request_type, rest_path, &verbs.to_verbs_string(), default_content_type)
    }

    fn add_for<T: RequestDto>(&mut self, rest_path: &str, verbs: ApplyTo) -> &mut Self {
        self.add_verbs(T::request_type(), rest_path, verbs, None)
    }

    fn add_for_with_content_type<T: RequestDto>(
        &mut self,
        rest_path: &str,
        verbs: ApplyTo,
        default_content_type: &str,
    ) -> &mut Self {
        self.add_verbs(T::request_type(), rest_path, verbs, Some(default_content_type))
    }

    /// Register `url_template` with one `{Property}` token per selector
    ///
    /// ```rust,ignore
    /// routes.add_templated::<Booking>("GET", "users/{0}/bookings/{1}", &[
    ///     field!(Booking, user_id),
    ///     selector!(Booking, |b| b.id),
    /// ])?;
    /// // registers "users/{user_id}/bookings/{id}"
    /// ```
    fn add_templated<T: RequestDto>(
        &mut self,
        http_method: &str,
        url_template: &str,
        selectors: &[Selector<T>],
    ) -> RouteResult<&mut Self> {
        let path = template::format_route(url_template, selectors)?;
        Ok(self.add(T::request_type(), &path, http_method, None))
    }
}

impl<R: ServiceRoutes> ServiceRoutesExt for R {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::{RestPath, RouteTable};

    fn request(name: &str, properties: &[&str]) -> TypeInfo {
        TypeInfo::new(name).with_properties(properties.iter().copied())
    }

    fn service(name: &str, request: TypeInfo, hooks: &[&str]) -> TypeInfo {
        TypeInfo::new(name)
            .extends(TypeInfo::generic(REST_SERVICE_BASE, vec![request]))
            .declares_all(hooks.iter().copied())
    }

    fn routes(table: &RouteTable) -> Vec<(&str, &str, &str)> {
        table
            .rest_paths()
            .iter()
            .map(|p: &RestPath| (p.request_type().name(), p.path(), p.verbs()))
            .collect()
    }

    fn id_options(id_field: &str) -> InferenceOptions {
        InferenceOptions { id_field: id_field.to_string(), ..InferenceOptions::default() }
    }

    #[test]
    fn test_collection_and_detail_routes() {
        let module = ServiceModule::new("app").with_type(service(
            "Foo",
            request("Foo", &["Id", "Name"]),
            &["on_post", "on_get"],
        ));

        let mut table = RouteTable::new();
        table.add_from_modules_with(&[module], &id_options("Id")).unwrap();

        assert_eq!(routes(&table), [("Foo", "Foo", "GET POST"), ("Foo", "Foo/{Id}", "GET POST")]);
    }

    #[test]
    fn test_declared_verbs_match_hook_names() {
        let orders = service("Orders", request("Order", &[]), &["helper", "on_patch", "on_get"]);
        assert_eq!(declared_verbs(&orders), supported_verbs(orders.declared_methods()));
        assert_eq!(declared_verbs(&orders), ApplyTo::GET | ApplyTo::PATCH);
    }

    #[test]
    fn test_service_without_hooks_is_skipped() {
        let module = ServiceModule::new("app")
            .with_type(service("Idle", request("Idle", &["id"]), &[]))
            .with_type(service("Helpers", request("Helpers", &[]), &["format_reply"]));

        let mut table = RouteTable::new();
        table.add_from_modules(&[module]).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_request_without_id_gets_single_route() {
        let module = ServiceModule::new("app")
            .with_type(service("Search", request("Search", &["query"]), &["on_get"]));

        let mut table = RouteTable::new();
        table.add_from_modules(&[module]).unwrap();
        assert_eq!(routes(&table), [("Search", "Search", "GET")]);
    }

    #[test]
    fn test_hooks_on_bases_do_not_count() {
        let audited = TypeInfo::new("Audited")
            .as_abstract()
            .extends(TypeInfo::generic(REST_SERVICE_BASE, vec![request("Order", &["id"])]))
            .declares("on_get");
        let orders = TypeInfo::new("Orders").extends(audited).declares("on_delete");

        let mut table = RouteTable::new();
        table.add_from_modules(&[ServiceModule::new("app").with_type(orders)]).unwrap();

        assert_eq!(
            routes(&table),
            [("Order", "Orders", "DELETE"), ("Order", "Orders/{id}", "DELETE")]
        );
    }

    #[test]
    fn test_abstract_private_and_unrelated_types_ignored() {
        let module = ServiceModule::new("app")
            .with_type(service("Draft", request("Draft", &[]), &["on_get"]).as_abstract())
            .with_type(service("Hidden", request("Hidden", &[]), &["on_get"]).private())
            .with_type(TypeInfo::new("Clock").declares("on_get"));

        let mut table = RouteTable::new();
        table.add_from_modules(&[module]).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_multiple_modules_in_order() {
        let first = ServiceModule::new("a").with_type(service("A", request("A", &[]), &["on_put"]));
        let second =
            ServiceModule::new("b").with_type(service("B", request("B", &[]), &["on_patch"]));

        let mut table = RouteTable::new();
        table.add_from_modules(&[first, second]).unwrap();
        assert_eq!(routes(&table), [("A", "A", "PUT"), ("B", "B", "PATCH")]);
    }

    #[test]
    fn test_missing_request_type_is_reported_before_any_route() {
        let good = service("Good", request("Good", &[]), &["on_get"]);
        // matches the base by name but has no generic ancestor above it
        let bare =
            TypeInfo::generic(REST_SERVICE_BASE, vec![request("Orphan", &[])]).declares("on_get");
        let module = ServiceModule::new("app").with_type(good).with_type(bare);

        let mut table = RouteTable::new();
        let err = table.add_from_modules(std::slice::from_ref(&module)).unwrap_err();
        assert_eq!(
            err,
            RouteError::MissingRequestType { service: "RestServiceBase<Orphan>".to_string() }
        );
        assert!(table.is_empty());

        let lenient = InferenceOptions { strict: false, ..InferenceOptions::default() };
        table.add_from_modules_with(&[module], &lenient).unwrap();
        assert_eq!(routes(&table), [("Good", "Good", "GET")]);
    }

    #[test]
    fn test_generic_base_without_arguments() {
        let odd = TypeInfo::new("Odd")
            .extends(TypeInfo::generic(REST_SERVICE_BASE, vec![]))
            .declares("on_get");
        let mut table = RouteTable::new();
        let err = table.add_from_modules(&[ServiceModule::new("app").with_type(odd)]).unwrap_err();
        assert!(matches!(err, RouteError::MissingRequestType { service } if service == "Odd"));
    }

    #[test]
    fn test_add_verbs_and_typed_adds() {
        struct Ping;
        impl RequestDto for Ping {
            fn type_name() -> &'static str {
                "Ping"
            }
            fn field_names() -> &'static [&'static str] {
                &["id"]
            }
        }

        let mut table = RouteTable::new();
        table
            .add_verbs(RequestType::new("Ping"), "ping", ApplyTo::PATCH | ApplyTo::GET, None)
            .add_for::<Ping>("ping/all", ApplyTo::ALL)
            .add_for_with_content_type::<Ping>("ping.csv", ApplyTo::GET, "text/csv");

        assert_eq!(
            routes(&table),
            [
                ("Ping", "ping", "GET PATCH"),
                ("Ping", "ping/all", "GET POST PUT DELETE PATCH"),
                ("Ping", "ping.csv", "GET"),
            ]
        );
        assert_eq!(table.rest_paths()[2].default_content_type(), Some("text/csv"));
    }

    #[test]
    fn test_add_templated() {
        struct Booking;
        impl RequestDto for Booking {
            fn type_name() -> &'static str {
                "Booking"
            }
            fn field_names() -> &'static [&'static str] {
                &["UserId", "Name"]
            }
        }

        let mut table = RouteTable::new();
        table
            .add_templated::<Booking>(
                "GET",
                "api/{0}/{1}",
                &[Selector::expr("|x| x.UserId"), Selector::field("Name")],
            )
            .unwrap();
        assert_eq!(routes(&table), [("Booking", "api/{UserId}/{Name}", "GET")]);

        let err = table
            .add_templated::<Booking>("GET", "api/{0}", &[Selector::expr("|x| x.Name.len()")])
            .unwrap_err();
        assert!(matches!(err, RouteError::UnsupportedExpression { .. }));

        let err = table
            .add_templated::<Booking>("GET", "api/{0}/{1}", &[Selector::field("Name")])
            .unwrap_err();
        assert!(matches!(err, RouteError::FormatMismatch { .. }));
        assert_eq!(table.len(), 1);
    }
}
