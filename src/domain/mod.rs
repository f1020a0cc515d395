// ============================================================================
// Domain Module
// Format tags and configuration shared by the codecs
// ============================================================================

pub mod config;

pub use config::{FormatConfig, FormatTag, DEFAULT_EXPANSION_DIGITS, MAX_REPEATING_DIGITS};
