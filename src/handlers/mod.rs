pub mod api;
pub mod console;
pub mod help;

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;
