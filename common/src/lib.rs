//! Shared model and rendering rules for the sample map dashboard.
//!
//! Everything in here is plain Rust with no browser dependency so the rules
//! that decide what ends up on the map can be exercised with `cargo test`.

pub mod markers;
pub mod model;
pub mod requests;
pub mod status;
