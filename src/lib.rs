pub mod analytics;
pub mod config;
pub mod constants;
pub mod contact;
pub mod content;
pub mod error;
pub mod logging;
pub mod observability;
pub mod seo;
pub mod server;
pub mod sitemap;

// Layered boundaries for application, infrastructure and presentation
pub mod app;
pub mod infra;
pub mod web;
