use crate::config::Config;
use crate::services::CompletionClient;
use crate::templates::TemplateEngine;
use anyhow::Result;
use std::sync::Arc;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub completions: Arc<CompletionClient>,
    pub templates: Arc<TemplateEngine>,
}

impl AppState {
    pub fn new(config: Config, completions: Arc<CompletionClient>) -> Result<Self> {
        let templates = TemplateEngine::new()?;

        Ok(Self {
            config: Arc::new(config),
            completions,
            templates: Arc::new(templates),
        })
    }
}
