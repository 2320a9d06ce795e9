// logtool - lib.rs
//
// Library entry point, exposing all modules for integration testing
// and programmatic use. `main.rs` only wires the CLI to `app::run`.

pub mod app;
pub mod cli;
pub mod core;
pub mod platform;
pub mod util;
