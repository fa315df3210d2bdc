// Core modules
pub mod config;
pub mod services;
pub mod state;
pub mod templates;
pub mod types;
pub mod web;

// Re-exports
pub use services::CompletionClient;
pub use state::AppState;
pub use templates::TemplateEngine;
