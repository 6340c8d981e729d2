//! Catcher configuration types
//!
//! Configuration is small: which domain to stamp on error objects, which
//! unwinds to catch, and whether the panic hook stays quiet while a guarded
//! block runs.

use serde::{Deserialize, Serialize};

use crate::types::{CatcherError, ERROR_DOMAIN};

/// Configuration for an [`ExceptionCatcher`](crate::ExceptionCatcher)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatcherConfig {
    /// Domain tag written into every error object
    #[serde(default = "default_domain")]
    pub domain: String,

    /// Catch plain panics too (false = only `raise`d exceptions are caught)
    #[serde(default = "default_true")]
    pub catch_panics: bool,

    /// Suppress panic hook output on this thread while a block runs
    #[serde(default = "default_true")]
    pub silence_panic_hook: bool,
}

fn default_domain() -> String {
    ERROR_DOMAIN.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for CatcherConfig {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            catch_panics: true,
            silence_panic_hook: true,
        }
    }
}

impl CatcherConfig {
    /// Create a new catcher configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, CatcherError> {
        let config: CatcherConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Builder method: set the error domain
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Builder method: catch plain panics or only raised exceptions
    pub fn with_catch_panics(mut self, enabled: bool) -> Self {
        self.catch_panics = enabled;
        self
    }

    /// Builder method: silence the panic hook while a block runs
    pub fn with_silenced_panic_hook(mut self, enabled: bool) -> Self {
        self.silence_panic_hook = enabled;
        self
    }

    /// Check that the configuration can produce valid error objects
    pub fn validate(&self) -> Result<(), CatcherError> {
        if self.domain.trim().is_empty() {
            return Err(CatcherError::InvalidConfig(
                "error domain must not be empty".to_string(),
            ));
        }
        if self.domain.contains('\0') {
            return Err(CatcherError::InvalidConfig(
                "error domain must not contain NUL".to_string(),
            ));
        }
        Ok(())
    }
}
