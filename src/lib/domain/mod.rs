pub mod merger;
pub mod models;
