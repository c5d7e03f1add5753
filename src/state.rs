// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::completion::CompletionClient;

pub type SharedState = Arc<AppState>;

#[derive(Debug)]
pub struct AppState {
    pub assistant: CompletionClient,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            assistant: CompletionClient::new(config)?,
        })
    }
}
