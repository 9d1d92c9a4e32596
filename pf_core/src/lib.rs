mod fixes;
mod lang_service;
mod project;
mod source;
mod symbols;
mod syntax;
mod tests;
mod utils;

pub mod rust_api;
