//! BDD suite for route inference
//!
//! `hotel` holds a small typed API declared through the derive macros, so
//! scenarios can compare typed services with hand-built type metadata.
//! `features` holds the cucumber `World` and step definitions.

pub mod features;
pub mod hotel;
