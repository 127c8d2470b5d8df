//! Declarative helpers for property selectors
//!
//! Both macros type-check their argument against the request type, so a
//! misspelled field is a compile error rather than an `UnknownProperty` at
//! start-up. The field must be visible where the macro is used.

/// Field token for
/// [`ServiceRoutesExt::add_templated`](crate::routes::ServiceRoutesExt::add_templated)
///
/// ```rust,ignore
/// let user = field!(Booking, user_id);
/// ```
#[macro_export]
macro_rules! field {
    ($request:ty, $field:ident) => {{
        let _ = |x: &$request| {
            let _ = &x.$field;
        };
        $crate::routes::Selector::<$request>::field(stringify!($field))
    }};
}

/// Closure selector; the body must be a member access on the parameter
///
/// ```rust,ignore
/// let nights = selector!(Booking, |b| b.nights as u64);
/// ```
///
/// Anything else (a method call, a nested path) still compiles but is
/// rejected with `RouteError::UnsupportedExpression` when the route is added.
#[macro_export]
macro_rules! selector {
    ($request:ty, |$param:ident| $body:expr) => {{
        let _ = |$param: &$request| {
            let _ = &($body);
        };
        $crate::routes::Selector::<$request>::expr(stringify!(|$param| $body))
    }};
}
