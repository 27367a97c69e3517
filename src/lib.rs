pub mod api;
pub mod cli;
pub mod config;
pub mod dates;
pub mod responder;
pub mod store;
pub mod summary;
