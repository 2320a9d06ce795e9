// logtool - app/mod.rs
//
// Application layer: orchestration of a single invocation.
// Dependencies: core, platform.

pub mod reader;
pub mod run;
