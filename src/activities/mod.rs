pub mod handlers;
pub mod models;
mod scoring;
mod window;
