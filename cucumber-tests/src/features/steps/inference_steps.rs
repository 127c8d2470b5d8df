use cucumber::{given, then, when};
use restroute_core::prelude::*;
use restroute_core::service::REST_SERVICE_BASE;

use crate::features::world::{error_kind, list, RouteWorld};

// Background
#[given("an empty route table")]
fn given_empty_table(world: &mut RouteWorld) {
    world.table = RouteTable::new();
}

#[given(regex = r#"^a request type "(\S+)" with properties "([^"]*)"$"#)]
fn given_request_type(world: &mut RouteWorld, name: String, properties: String) {
    let info = TypeInfo::new(name.as_str()).with_properties(list(&properties));
    world.requests.insert(name, info);
}

#[given(regex = r#"^a service "(\S+)" handling "(\S+)" with hooks "([^"]*)"$"#)]
fn given_service(world: &mut RouteWorld, name: String, request: String, hooks: String) {
    let service = TypeInfo::new(name)
        .extends(world.service_base(&request))
        .declares_all(list(&hooks));
    world.services.push(service);
}

#[given(regex = r#"^an abstract service "(\S+)" handling "(\S+)" with hooks "([^"]*)"$"#)]
fn given_abstract_service(world: &mut RouteWorld, name: String, request: String, hooks: String) {
    let service = TypeInfo::new(name)
        .as_abstract()
        .extends(world.service_base(&request))
        .declares_all(list(&hooks));
    world.services.push(service);
}

#[given(regex = r#"^a service "(\S+)" extending "(\S+)" with hooks "([^"]*)"$"#)]
fn given_derived_service(world: &mut RouteWorld, name: String, base: String, hooks: String) {
    let service = TypeInfo::new(name).extends(world.service(&base)).declares_all(list(&hooks));
    world.services.push(service);
}

#[given(regex = r#"^a service "(\S+)" without a request type with hooks "([^"]*)"$"#)]
fn given_orphan_service(world: &mut RouteWorld, name: String, hooks: String) {
    let service = TypeInfo::new(name)
        .extends(TypeInfo::generic(REST_SERVICE_BASE, vec![]))
        .declares_all(list(&hooks));
    world.services.push(service);
}

#[given(regex = r#"^the id field is "(\S+)"$"#)]
fn given_id_field(world: &mut RouteWorld, id_field: String) {
    world.options.id_field = id_field;
}

#[given("lenient scanning")]
fn given_lenient(world: &mut RouteWorld) {
    world.options.strict = false;
}

#[given("the typed hotel module")]
fn given_hotel_module(world: &mut RouteWorld) {
    world.modules.push(crate::hotel::module());
}

#[when("the modules are scanned")]
fn when_scanned(world: &mut RouteWorld) {
    let mut modules = world.modules.clone();
    if !world.services.is_empty() {
        modules.push(world.scenario_module());
    }

    let options = world.options.clone();
    let result = world.table.add_from_modules_with(&modules, &options).map(|_| ());
    world.record(result);
}

#[when(regex = r#"^I add "(\S+)" for "(\S+)" with verbs "([^"]*)"$"#)]
fn when_add_verbs(world: &mut RouteWorld, path: String, request: String, verbs: String) {
    let flags: ApplyTo = list(&verbs)
        .iter()
        .map(|v| v.parse::<HttpMethod>())
        .collect::<RouteResult<Vec<_>>>()
        .map(|methods| methods.into_iter().collect())
        .unwrap_or_else(|err| panic!("bad verb list {verbs:?}: {err}"));

    world.table.add_verbs(RequestType::new(request), &path, flags, None);
}

#[then(regex = r#"^the route "(\S+)" accepts "([^"]*)" for "(\S+)"$"#)]
fn then_route_accepts(world: &mut RouteWorld, path: String, verbs: String, request: String) {
    let route = world
        .table
        .rest_paths()
        .iter()
        .find(|p| p.path() == path)
        .unwrap_or_else(|| panic!("no route {path} in {:?}", world.table.rest_paths()));

    assert_eq!(route.verbs(), verbs);
    assert_eq!(route.request_type().name(), request);
}

#[then(regex = r#"^the table has (\d+) routes?$"#)]
fn then_table_len(world: &mut RouteWorld, expected: usize) {
    assert_eq!(world.table.len(), expected, "routes: {:?}", world.table.rest_paths());
}

#[then(regex = r#"^registration fails with "(\S+)"$"#)]
fn then_fails_with(world: &mut RouteWorld, kind: String) {
    let err = world.last_error.as_ref().expect("expected an error");
    assert_eq!(error_kind(err), kind, "got {err}");
}

#[then("registration succeeds")]
fn then_succeeds(world: &mut RouteWorld) {
    assert!(world.last_error.is_none(), "unexpected error: {:?}", world.last_error);
}
