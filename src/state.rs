//! Shared state injected into HTTP handlers.

use crate::config::{Config, DEFAULT_MAX_BATCH_SIZE, DEFAULT_MAX_INPUT_LENGTH};

/// Request limits shared by all handlers.
///
/// The URL core itself is stateless; this only carries the limits the HTTP
/// layer enforces before calling into it.
#[derive(Debug, Clone)]
pub struct AppState {
    pub max_batch_size: usize,
    pub max_input_length: usize,
}

impl AppState {
    pub fn new(max_batch_size: usize, max_input_length: usize) -> Self {
        Self {
            max_batch_size,
            max_input_length,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_batch_size, config.max_input_length)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_BATCH_SIZE, DEFAULT_MAX_INPUT_LENGTH)
    }
}
