//! Shared constants for newsticker.

/// Fixed key of the singleton ticker record. Both write paths upsert into
/// this one record; it is never deleted in normal operation.
pub const TICKER_KEY: &str = "breaking_ticker";

/// Separator used when joining entries into the combined display string.
pub const TICKER_SEPARATOR: &str = " \u{2022} ";

/// Bullet character the reporter free-text path splits on.
pub const BULLET: char = '\u{2022}';

/// Attribution fallback when the reporter path is called without a
/// verified caller identity.
pub const PLACEHOLDER_IDENTITY: &str = "reporter";
