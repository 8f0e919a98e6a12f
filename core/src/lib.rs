// KompKit core library root
// Shared utilities consumed by UI event handlers: debouncing, email validation
// and locale-aware currency formatting.

pub mod config;
pub mod debounce;
pub mod error;
pub mod format;
pub mod models;
pub mod validate;

pub use config::settings::{DebounceSettings, FormatSettings, KitSettings};
pub use debounce::{debounce, Debouncer, DEFAULT_WAIT};
pub use error::{KompKitError, Result};
pub use format::{format_currency, CurrencyFormat, DEFAULT_CURRENCY, DEFAULT_LOCALE};
pub use validate::is_email;
