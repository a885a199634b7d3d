//! App Configuration
//!
//! Read from a JSON `<script id="app-config">` element in the host page.

use std::collections::HashSet;

use serde::Deserialize;
use tracing::Level;

use crate::models::Todo;

/// Id of the script element holding the JSON config
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid app config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown log level: {0}")]
    InvalidLogLevel(String),
    #[error("duplicate todo id in app config: {0}")]
    DuplicateTodoId(u32),
    #[error("todo id {0} leaves no room for new todos")]
    TodoIdOutOfRange(u32),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Heading shown above the list
    pub title: String,
    #[serde(rename = "logLevel")]
    pub log_level: String,
    /// Todos the store starts with
    pub todos: Vec<Todo>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Todos".to_string(),
            log_level: "info".to_string(),
            todos: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.level()?;
        let mut seen = HashSet::new();
        for todo in &self.todos {
            if todo.id == u32::MAX {
                return Err(ConfigError::TodoIdOutOfRange(todo.id));
            }
            if !seen.insert(todo.id) {
                return Err(ConfigError::DuplicateTodoId(todo.id));
            }
        }
        Ok(())
    }

    pub fn level(&self) -> Result<Level, ConfigError> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

/// Load config from the page. No config element means defaults.
pub fn load() -> Result<AppConfig, ConfigError> {
    let text = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match text {
        Some(json) if !json.trim().is_empty() => AppConfig::from_json(&json),
        _ => Ok(AppConfig::default()),
    }
}
