use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{BULLET, TICKER_SEPARATOR};

/// The singleton breaking-ticker record.
///
/// `texts` is ordered newest-first (index 0 is the most prominent entry)
/// and never contains duplicates under case-insensitive trimmed comparison,
/// nor blank entries. `enabled == false` means consumers must treat the
/// ticker as absent regardless of `texts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerState {
    pub texts: Vec<String>,
    pub enabled: bool,
    pub updated_at: DateTime<Utc>,
    pub updated_by: Option<String>,
}

impl TickerState {
    /// Fresh record as created implicitly by the first write. The ticker
    /// starts enabled; only an explicit toggle disables it.
    #[must_use]
    pub fn new() -> Self {
        Self { texts: Vec::new(), enabled: true, updated_at: Utc::now(), updated_by: None }
    }

    /// Entries joined with the bullet separator for one-line display.
    #[must_use]
    pub fn combined_text(&self) -> String {
        self.texts.join(TICKER_SEPARATOR)
    }

    /// Add an entry at the front (newest-first). A case-insensitive match
    /// already in the list is dropped first, so re-adding an existing
    /// headline refreshes its position instead of duplicating it.
    ///
    /// Returns `false` (list untouched) when the text is blank after
    /// trimming.
    pub fn add(&mut self, text: &str) -> bool {
        let Some(entry) = normalize_entry(text) else {
            return false;
        };
        // Stored entries are trimmed by construction, so folding alone
        // is enough for the comparison.
        let folded = entry.to_lowercase();
        self.texts.retain(|t| t.to_lowercase() != folded);
        self.texts.insert(0, entry);
        true
    }

    /// Remove all entries exactly equal (stored form, case-sensitive) to
    /// `text`. Returns `false` when nothing matched.
    pub fn remove(&mut self, text: &str) -> bool {
        let before = self.texts.len();
        self.texts.retain(|t| t != text);
        self.texts.len() != before
    }

    /// Replace the whole list with the given candidates: trimmed, blanks
    /// dropped, de-duplicated case-insensitively keeping the first
    /// occurrence's position and spelling.
    pub fn replace_all<I>(&mut self, texts: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.texts = dedup_first_occurrence(texts);
    }

    /// Legacy single-value path: the list becomes `[trimmed]`, or empty
    /// when the text is blank.
    pub fn set_single(&mut self, text: &str) {
        self.texts = normalize_entry(text).into_iter().collect();
    }
}

impl Default for TickerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-side projection of the ticker.
///
/// An absent record, a disabled ticker, and an empty list all collapse to
/// the same "nothing to display" shape: `enabled == false` and an empty
/// combined text.
#[derive(Debug, Clone, Serialize)]
pub struct TickerView {
    pub enabled: bool,
    pub texts: Vec<String>,
    pub combined_text: String,
    pub updated_at: Option<DateTime<Utc>>,
}

impl TickerView {
    #[must_use]
    pub fn from_state(state: Option<&TickerState>) -> Self {
        match state {
            Some(s) if s.enabled && !s.texts.is_empty() => Self {
                enabled: true,
                texts: s.texts.clone(),
                combined_text: s.combined_text(),
                updated_at: Some(s.updated_at),
            },
            _ => Self {
                enabled: false,
                texts: Vec::new(),
                combined_text: String::new(),
                updated_at: None,
            },
        }
    }
}

/// Structured mutation kinds accepted by the admin write path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TickerAction {
    Add,
    Delete,
    Edit,
    Toggle,
    Set,
}

impl std::str::FromStr for TickerAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "delete" => Ok(Self::Delete),
            "edit" => Ok(Self::Edit),
            "toggle" => Ok(Self::Toggle),
            "set" => Ok(Self::Set),
            other => Err(format!("unknown ticker action: {other}")),
        }
    }
}

/// Trim an entry; `None` when nothing but whitespace remains.
#[must_use]
pub fn normalize_entry(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

/// Trim, drop blanks, and de-duplicate case-insensitively, keeping the
/// first occurrence's position and spelling.
#[must_use]
pub fn dedup_first_occurrence<I>(texts: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for candidate in texts {
        if let Some(entry) = normalize_entry(candidate.as_ref()) {
            if seen.insert(entry.to_lowercase()) {
                out.push(entry);
            }
        }
    }
    out
}

/// Split the reporter free-text form into entries.
///
/// A string containing the bullet separator is a full replacement list;
/// anything else is a single entry. Blank input yields an empty list — the
/// caller decides whether that is an error.
#[must_use]
pub fn split_free_text(raw: &str) -> Vec<String> {
    if raw.contains(BULLET) {
        dedup_first_occurrence(raw.split(BULLET))
    } else {
        normalize_entry(raw).into_iter().collect()
    }
}
