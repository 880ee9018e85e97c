//! Two small security exercises: a heuristic password-strength checker and
//! a Caesar cipher.

pub mod analyzer;
pub mod cipher;
pub mod cli;
pub mod core;
pub mod logging;
pub mod models;
pub mod utils;

pub use crate::analyzer::{PasswordAnalysis, PasswordAnalyzer, Strength};
pub use crate::cipher::CaesarCipher;
pub use crate::core::Config;

/// Load `.env` (if any), read the configuration and start logging.
///
/// A logger that fails to start is reported on stderr and otherwise ignored.
pub fn bootstrap() -> Config {
    let dotenv_loaded = dotenvy::dotenv().is_ok();
    let config = Config::load();

    if let Err(e) = logging::init(&config) {
        eprintln!("Failed to initialise logging: {}", e);
    }

    if dotenv_loaded {
        log::debug!("Loaded .env file");
    }
    log::debug!("Loaded config: {:?}", config);

    config
}
