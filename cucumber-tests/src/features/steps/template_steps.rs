use cucumber::{then, when};
use restroute_core::prelude::*;
use restroute_core::routes::template::format_positional;

use crate::features::world::{list, RouteWorld};
use crate::hotel::Booking;

#[when(regex = r#"^I add a templated "(\S+)" booking route "([^"]*)" selecting fields "([^"]*)"$"#)]
fn when_templated_fields(world: &mut RouteWorld, verb: String, template: String, fields: String) {
    let selectors: Vec<Selector<Booking>> =
        list(&fields).into_iter().map(Selector::field).collect();
    let result = world.table.add_templated(&verb, &template, &selectors).map(|_| ());
    world.record(result);
}

#[when(regex = r#"^I add a templated "(\S+)" booking route "([^"]*)" with selector "([^"]*)"$"#)]
fn when_templated_expr(world: &mut RouteWorld, verb: String, template: String, source: String) {
    let selectors = [Selector::<Booking>::expr(source)];
    let result = world.table.add_templated(&verb, &template, &selectors).map(|_| ());
    world.record(result);
}

#[then(regex = r#"^formatting "([^"]*)" with "([^"]*)" gives "([^"]*)"$"#)]
fn then_formatting_gives(
    _world: &mut RouteWorld,
    template: String,
    args: String,
    expected: String,
) {
    let formatted = format_positional(&template, &list(&args)).unwrap();
    assert_eq!(formatted, expected);
}
