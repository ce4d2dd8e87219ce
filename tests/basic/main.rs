#[path = "../context.rs"]
mod context;

mod allocation_tests;
mod staging_tests;
