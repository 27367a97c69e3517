pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod routes_chat;
pub mod validation;
