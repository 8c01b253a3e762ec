//! Process-wide server state: the note backend and the loaded configuration.

use std::path::PathBuf;
use std::sync::{Once, OnceLock};

use store::{AppConfig, MemoryBackend};

static BACKEND: OnceLock<MemoryBackend> = OnceLock::new();
static CONFIG: OnceLock<AppConfig> = OnceLock::new();
static DOTENV: Once = Once::new();

/// Read `.env` into the process environment, at most once.
pub fn load_env() {
    DOTENV.call_once(|| {
        dotenvy::dotenv().ok();
    });
}

/// The backend every server function talks to.
pub fn backend() -> &'static MemoryBackend {
    BACKEND.get_or_init(MemoryBackend::new)
}

/// Configuration from `NOTES_CONFIG` (default `notes.toml`). Invalid files
/// are logged and replaced by the defaults.
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        load_env();
        let path = std::env::var("NOTES_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(AppConfig::filename()));
        match AppConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Using default configuration: {}", e);
                AppConfig::default()
            }
        }
    })
}
