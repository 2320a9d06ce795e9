// logtool - platform/mod.rs
//
// Platform abstraction layer: filesystem access.
// Dependencies: standard library, core model types.
// Must NOT depend on: app.

pub mod fs;
