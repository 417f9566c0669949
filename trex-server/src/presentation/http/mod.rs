pub mod app_error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod problem;
pub mod routes;
pub mod translator;
