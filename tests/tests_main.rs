#[path = "helpers/mod.rs"]
mod helpers;

#[path = "factory/mod.rs"]
mod factory;

#[path = "runtime/mod.rs"]
mod runtime;
