//! In-memory transport for unit tests

use crate::error::{Error, Result};
use crate::http::Transport;
use crate::types::JsonValue;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

pub const BASE: &str = "https://example.test/api/v0/";

/// Answers GET requests from a fixed URL table and records every call
#[derive(Default)]
pub struct ScriptedTransport {
    responses: HashMap<String, std::result::Result<JsonValue, (u16, String)>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` (relative to [`BASE`]) with `body`
    pub fn ok(mut self, path: &str, body: JsonValue) -> Self {
        self.responses.insert(format!("{BASE}{path}"), Ok(body));
        self
    }

    /// Answer `url` (relative to [`BASE`]) with an HTTP error
    pub fn fail(mut self, path: &str, status: u16, error: &str) -> Self {
        self.responses
            .insert(format!("{BASE}{path}"), Err((status, error.to_string())));
        self
    }

    /// URLs requested so far, relative to [`BASE`]
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|u| u.strip_prefix(BASE).unwrap_or(u).to_string())
            .collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get_json(&self, url: &str) -> Result<JsonValue> {
        self.calls.lock().unwrap().push(url.to_string());
        match self.responses.get(url) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err((status, error))) => Err(Error::remote(url, Some(*status), error, "scripted")),
            None => Err(Error::remote(url, Some(404), "Not Found", "no scripted response")),
        }
    }
}
