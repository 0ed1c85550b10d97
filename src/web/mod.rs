// file: src/web/mod.rs
// description: http layer module exports

pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, start_server};
pub use state::AppState;
