//! Constrained password generation library
//!
//! This library generates random passwords from user-selected character
//! pools, with per-group "require one" rules and explicitly guaranteed
//! characters, and scores them with a simple strength meter.
//!
//! Neither part is a security guarantee: the generator uses whatever
//! [`rand::Rng`] the caller passes in, and the meter is a UX heuristic.
//!
//! # Features
//!
//! - `async` (default): Enables sending generated batches over a channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_GEN_SETTINGS_PATH`: Custom path to the saved settings file
//!   (default: `./pwdGenConfig.json`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_gen::{CharacterGroup, Config, evaluate_for_display, generate};
//!
//! let mut config = Config::default();
//! config.set_length(16);
//! config.set_group_enabled(CharacterGroup::Symbol, false);
//! config.toggle_guaranteed('Z');
//!
//! let passwords = generate(&config.request(), &mut rand::thread_rng());
//! for pwd in &passwords {
//!     println!("{pwd}");
//! }
//!
//! if let Some(evaluation) = evaluate_for_display(&passwords, config.bulk_count()) {
//!     println!("Strength: {} ({})", evaluation.label(), evaluation.score.value());
//! }
//! ```

// Internal modules
mod charset;
mod config;
mod evaluator;
mod generator;
mod sections;
mod settings;
mod types;

// Public API
pub use charset::{CharacterGroup, CharacterPools, GroupPool};
pub use config::{
    Config, GenerationRequest, StoredConfig, DEFAULT_BULK_COUNT, DEFAULT_LENGTH, MAX_BULK_COUNT,
    MAX_LENGTH, MIN_BULK_COUNT, MIN_LENGTH,
};
pub use evaluator::{evaluate_for_display, evaluate_password_strength};
pub use generator::{assemble_alphabet, generate, try_generate, validate, GenerationError};
pub use settings::{
    get_settings_path, load_settings, load_settings_from_path, save_settings,
    save_settings_to_path, SettingsError,
};
pub use types::{PasswordEvaluation, PasswordScore, PasswordStrength};

#[cfg(feature = "async")]
pub use generator::generate_tx;
