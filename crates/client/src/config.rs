use std::env;
use std::path::PathBuf;
use std::time::Duration;

use eyre::Result;
use tabletime_core::DEFAULT_ROOM_CODE;

/// Configuration for the client state machine.
///
/// All values come from environment variables with local-development
/// defaults:
///
/// - `TABLETIME_API_URL`: base path of the HTTP API
///   (default: "http://localhost:3000/api")
/// - `TABLETIME_ROOM_CODE`: group identifier sent on every call
/// - `TABLETIME_IDENTITY_FILE`: where the chosen identity persists
/// - `TABLETIME_DEBOUNCE_MS`: flush debounce delay (default: 400)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the availability API
    pub api_base_url: String,
    /// Group identifier (fixed in normal deployments)
    pub room_code: String,
    /// Path of the persisted identity file
    pub identity_path: PathBuf,
    /// Pause after the last toggle before a flush fires
    pub debounce: Duration,
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let api_base_url = env::var("TABLETIME_API_URL")
            .unwrap_or_else(|_| "http://localhost:3000/api".to_string());

        let room_code =
            env::var("TABLETIME_ROOM_CODE").unwrap_or_else(|_| DEFAULT_ROOM_CODE.to_string());

        let identity_path = env::var("TABLETIME_IDENTITY_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".tabletime-identity"));

        let debounce_ms = env::var("TABLETIME_DEBOUNCE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(400);

        Ok(Self {
            api_base_url,
            room_code,
            identity_path,
            debounce: Duration::from_millis(debounce_ms),
        })
    }
}
