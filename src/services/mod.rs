pub mod booking;
pub mod renderer;
pub mod search;
pub mod slot_parser;



#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;
