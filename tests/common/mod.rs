#![allow(dead_code)]

use urlkit::state::AppState;

/// State with default limits.
pub fn create_test_state() -> AppState {
    AppState::default()
}

/// State with tight limits for exercising rejections.
pub fn create_limited_state(max_batch_size: usize, max_input_length: usize) -> AppState {
    AppState::new(max_batch_size, max_input_length)
}
