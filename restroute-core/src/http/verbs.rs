//! Verb flags
//!
//! [`ApplyTo`] is a compact bit-set used to ask for one or more methods on a
//! route without spelling out the verb string. The string form always lists
//! verbs as `GET POST PUT DELETE PATCH`, whatever order they were combined in,
//! because consumers of the route table parse it positionally.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use super::HttpMethod;

/// Set of REST verbs a route should accept
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ApplyTo(u8);

impl ApplyTo {
    pub const NONE: ApplyTo = ApplyTo(0);
    pub const GET: ApplyTo = ApplyTo(1 << 0);
    pub const POST: ApplyTo = ApplyTo(1 << 1);
    pub const PUT: ApplyTo = ApplyTo(1 << 2);
    pub const DELETE: ApplyTo = ApplyTo(1 << 3);
    pub const PATCH: ApplyTo = ApplyTo(1 << 4);
    pub const ALL: ApplyTo = ApplyTo(0b1_1111);

    /// Flag for a single method; `None` for methods outside the REST set
    pub fn from_method(method: HttpMethod) -> Option<ApplyTo> {
        match method {
            HttpMethod::GET => Some(Self::GET),
            HttpMethod::POST => Some(Self::POST),
            HttpMethod::PUT => Some(Self::PUT),
            HttpMethod::DELETE => Some(Self::DELETE),
            HttpMethod::PATCH => Some(Self::PATCH),
            HttpMethod::HEAD | HttpMethod::OPTIONS => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every flag in `other` is also set here
    pub fn has(self, other: ApplyTo) -> bool {
        self.0 & other.0 == other.0
    }

    /// Set methods in canonical order
    pub fn methods(self) -> impl Iterator<Item = HttpMethod> {
        HttpMethod::REST
            .into_iter()
            .filter(move |m| Self::from_method(*m).is_some_and(|flag| self.has(flag)))
    }

    /// Space-separated verb list, e.g. `"GET POST"`; empty flags give `""`
    pub fn to_verbs_string(self) -> String {
        self.methods().map(|m| m.as_str()).collect::<Vec<_>>().join(" ")
    }
}

impl BitOr for ApplyTo {
    type Output = ApplyTo;

    fn bitor(self, rhs: ApplyTo) -> ApplyTo {
        ApplyTo(self.0 | rhs.0)
    }
}

impl BitOrAssign for ApplyTo {
    fn bitor_assign(&mut self, rhs: ApplyTo) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for ApplyTo {
    type Output = ApplyTo;

    fn bitand(self, rhs: ApplyTo) -> ApplyTo {
        ApplyTo(self.0 & rhs.0)
    }
}

impl FromIterator<HttpMethod> for ApplyTo {
    fn from_iter<I: IntoIterator<Item = HttpMethod>>(iter: I) -> Self {
        iter.into_iter()
            .filter_map(ApplyTo::from_method)
            .fold(ApplyTo::NONE, |acc, flag| acc | flag)
    }
}

impl fmt::Display for ApplyTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_verbs_string())
    }
}

impl fmt::Debug for ApplyTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApplyTo({})", self.to_verbs_string())
    }
}
