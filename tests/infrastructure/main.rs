#[path = "../context.rs"]
mod context;
