// logtool - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library, serde, regex, csv.
// Must NOT depend on: platform, app, or any filesystem access.

pub mod encoding;
pub mod export;
pub mod filter;
pub mod model;
pub mod render;
