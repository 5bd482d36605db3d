pub mod config;
pub mod middleware;
pub mod routes;
pub mod utils;
