use std::sync::Arc;

use chrono::Utc;
use newsticker_core::{PLACEHOLDER_IDENTITY, TickerState, TickerView, split_free_text};
use newsticker_storage::TickerStore;

use crate::ServiceError;

/// Owns the ticker mutation cycle: load the singleton, apply the merge
/// from `newsticker-core`, persist with a fresh timestamp.
///
/// There is no cross-writer coordination. Concurrent mutations each read
/// the same prior snapshot and the later upsert wins — accepted for
/// low-stakes, operator-driven ticker content.
pub struct TickerService {
    store: Arc<dyn TickerStore>,
}

impl TickerService {
    #[must_use]
    pub fn new(store: Arc<dyn TickerStore>) -> Self {
        Self { store }
    }

    /// Public read projection. Absent, disabled, and empty all present as
    /// "nothing to display".
    pub fn get(&self) -> Result<TickerView, ServiceError> {
        let state = self.store.find()?;
        Ok(TickerView::from_state(state.as_ref()))
    }

    /// Raw record, including attribution and the enabled flag as stored.
    /// Used by the reporter panel, which shows the ticker even while it
    /// is switched off.
    pub fn current(&self) -> Result<Option<TickerState>, ServiceError> {
        Ok(self.store.find()?)
    }

    /// Add one entry at the front. Blank text is a silent no-op that does
    /// not touch the stored record or its timestamp.
    pub fn add(&self, text: &str) -> Result<TickerState, ServiceError> {
        let mut state = self.load_or_create()?;
        if state.add(text) {
            self.persist(&mut state)?;
            tracing::debug!(entries = state.texts.len(), "ticker entry added");
        }
        Ok(state)
    }

    /// Remove exact matches of `text`. A miss is a no-op, not an error.
    pub fn delete(&self, text: &str) -> Result<TickerState, ServiceError> {
        let mut state = self.load_or_create()?;
        if state.remove(text) {
            self.persist(&mut state)?;
            tracing::debug!(entries = state.texts.len(), "ticker entry deleted");
        }
        Ok(state)
    }

    /// Replace the whole list (the admin "edit" action). The only
    /// structured operation that can shrink the set in one call.
    pub fn replace_all(&self, texts: &[String]) -> Result<TickerState, ServiceError> {
        let mut state = self.load_or_create()?;
        state.replace_all(texts);
        self.persist(&mut state)?;
        Ok(state)
    }

    /// Legacy single-value path: list becomes `[trimmed]` or empty.
    pub fn set_single(&self, text: &str) -> Result<TickerState, ServiceError> {
        let mut state = self.load_or_create()?;
        state.set_single(text);
        self.persist(&mut state)?;
        Ok(state)
    }

    /// Set `enabled` explicitly, or flip it when no value is given.
    /// Returns the resulting flag.
    pub fn toggle(&self, requested: Option<bool>) -> Result<bool, ServiceError> {
        let mut state = self.load_or_create()?;
        state.enabled = requested.unwrap_or(!state.enabled);
        self.persist(&mut state)?;
        tracing::info!(enabled = state.enabled, "ticker toggled");
        Ok(state.enabled)
    }

    /// Reporter free-text path: one string, bullet-separated or single.
    /// Always a full replacement of the list, always re-enables the
    /// ticker, and records attribution.
    ///
    /// `updated_by` must come from a layer that already verified the
    /// caller's credential; this service never inspects tokens itself.
    pub fn apply_free_text(
        &self,
        raw: &str,
        updated_by: Option<&str>,
    ) -> Result<TickerState, ServiceError> {
        let texts = split_free_text(raw);
        if texts.is_empty() {
            return Err(ServiceError::Validation("text is required".to_owned()));
        }

        let mut state = self.load_or_create()?;
        state.texts = texts;
        state.enabled = true;
        state.updated_by = Some(updated_by.unwrap_or(PLACEHOLDER_IDENTITY).to_owned());
        self.persist(&mut state)?;
        tracing::info!(
            entries = state.texts.len(),
            updated_by = state.updated_by.as_deref(),
            "ticker replaced via free-text"
        );
        Ok(state)
    }

    /// Upsert semantics: the record is created lazily, enabled, by the
    /// first mutating call.
    fn load_or_create(&self) -> Result<TickerState, ServiceError> {
        Ok(self.store.find()?.unwrap_or_default())
    }

    fn persist(&self, state: &mut TickerState) -> Result<(), ServiceError> {
        state.updated_at = Utc::now();
        self.store.upsert(state)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use newsticker_storage::MemoryStore;

    use super::*;

    fn create_service() -> TickerService {
        TickerService::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_first_write_creates_enabled_record() {
        let service = create_service();
        assert!(service.current().unwrap().is_none());

        service.add("first headline").unwrap();

        let state = service.current().unwrap().unwrap();
        assert!(state.enabled);
        assert_eq!(state.texts, vec!["first headline"]);
    }

    #[test]
    fn test_add_sequence_never_duplicates() {
        let service = create_service();
        service.add("Storm warning").unwrap();
        service.add("storm warning ").unwrap();
        service.add("Other news").unwrap();
        service.add("STORM WARNING").unwrap();

        let state = service.current().unwrap().unwrap();
        assert_eq!(state.texts, vec!["STORM WARNING", "Other news"]);
    }

    #[test]
    fn test_add_newest_first() {
        let service = create_service();
        service.add("A").unwrap();
        service.add("B").unwrap();
        assert_eq!(service.get().unwrap().texts, vec!["B", "A"]);
    }

    #[test]
    fn test_readd_reorders() {
        let service = create_service();
        service.add("A").unwrap();
        service.add("B").unwrap();
        service.add("a").unwrap();
        assert_eq!(service.current().unwrap().unwrap().texts, vec!["a", "B"]);
    }

    #[test]
    fn test_blank_add_leaves_record_untouched() {
        let service = create_service();
        service.add("A").unwrap();
        let before = service.current().unwrap().unwrap();

        service.add("   ").unwrap();

        let after = service.current().unwrap().unwrap();
        assert_eq!(after.texts, before.texts);
        assert_eq!(after.updated_at, before.updated_at, "no-op must not touch the timestamp");
    }

    #[test]
    fn test_delete_miss_is_noop() {
        let service = create_service();
        service.add("A").unwrap();
        let before = service.current().unwrap().unwrap();

        service.delete("not present").unwrap();

        let after = service.current().unwrap().unwrap();
        assert_eq!(after.texts, vec!["A"]);
        assert_eq!(after.updated_at, before.updated_at);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let service = create_service();
        service.add("A").unwrap();
        service.add("B").unwrap();

        service.delete("A").unwrap();
        let once = service.current().unwrap().unwrap();
        service.delete("A").unwrap();
        let twice = service.current().unwrap().unwrap();

        assert_eq!(once.texts, twice.texts);
        assert_eq!(once.texts, vec!["B"]);
    }

    #[test]
    fn test_replace_all_dedups_preserving_first_occurrence() {
        let service = create_service();
        service.add("old").unwrap();

        let texts: Vec<String> =
            ["X", "y", "x", "Z"].iter().map(|s| (*s).to_owned()).collect();
        service.replace_all(&texts).unwrap();

        assert_eq!(service.current().unwrap().unwrap().texts, vec!["X", "y", "Z"]);
    }

    #[test]
    fn test_set_single() {
        let service = create_service();
        service.add("A").unwrap();
        service.add("B").unwrap();

        service.set_single(" breaking ").unwrap();
        assert_eq!(service.current().unwrap().unwrap().texts, vec!["breaking"]);

        service.set_single("").unwrap();
        assert!(service.current().unwrap().unwrap().texts.is_empty());
    }

    #[test]
    fn test_combined_text_joins_entries() {
        let service = create_service();
        service.add("A").unwrap();
        service.add("B").unwrap();

        let view = service.get().unwrap();
        assert_eq!(view.combined_text, view.texts.join(" \u{2022} "));
    }

    #[test]
    fn test_toggle_explicit_and_flip() {
        let service = create_service();
        service.add("A").unwrap();

        assert!(!service.toggle(Some(false)).unwrap());
        assert!(service.toggle(None).unwrap());
        assert!(!service.toggle(None).unwrap());
    }

    #[test]
    fn test_disabled_ticker_reads_as_hidden() {
        let service = create_service();
        service.add("still stored").unwrap();
        service.toggle(Some(false)).unwrap();

        let view = service.get().unwrap();
        assert!(!view.enabled);
        assert!(view.texts.is_empty());
        assert!(view.combined_text.is_empty());

        // The entry itself is not lost, only hidden.
        assert_eq!(service.current().unwrap().unwrap().texts, vec!["still stored"]);
    }

    #[test]
    fn test_apply_free_text_bullet_split() {
        let service = create_service();
        let state = service
            .apply_free_text("Hello \u{2022} World \u{2022} Hello", None)
            .unwrap();
        assert_eq!(state.texts, vec!["Hello", "World"]);
        assert!(state.enabled);
    }

    #[test]
    fn test_apply_free_text_single_line() {
        let service = create_service();
        let state = service.apply_free_text("Just one line", None).unwrap();
        assert_eq!(state.texts, vec!["Just one line"]);
    }

    #[test]
    fn test_apply_free_text_blank_is_rejected() {
        let service = create_service();
        service.add("existing").unwrap();
        let before = service.current().unwrap().unwrap();

        let err = service.apply_free_text("   ", None).unwrap_err();
        assert!(err.is_validation());

        let after = service.current().unwrap().unwrap();
        assert_eq!(after.texts, before.texts);
        assert_eq!(after.updated_at, before.updated_at, "rejected call must not mutate");
    }

    #[test]
    fn test_apply_free_text_forces_enabled() {
        let service = create_service();
        service.add("A").unwrap();
        service.toggle(Some(false)).unwrap();

        service.apply_free_text("Back on air", None).unwrap();

        let view = service.get().unwrap();
        assert!(view.enabled);
        assert_eq!(view.texts, vec!["Back on air"]);
    }

    #[test]
    fn test_apply_free_text_replaces_rather_than_merges() {
        let service = create_service();
        service.add("old one").unwrap();
        service.add("old two").unwrap();

        service.apply_free_text("fresh \u{2022} list", None).unwrap();

        assert_eq!(service.current().unwrap().unwrap().texts, vec!["fresh", "list"]);
    }

    #[test]
    fn test_apply_free_text_attribution() {
        let service = create_service();

        service.apply_free_text("news", Some("desk@starnews.in")).unwrap();
        assert_eq!(
            service.current().unwrap().unwrap().updated_by.as_deref(),
            Some("desk@starnews.in")
        );

        service.apply_free_text("more news", None).unwrap();
        assert_eq!(
            service.current().unwrap().unwrap().updated_by.as_deref(),
            Some("reporter"),
            "missing identity falls back to the placeholder"
        );
    }

    #[test]
    fn test_structured_writes_preserve_attribution() {
        let service = create_service();
        service.apply_free_text("news", Some("desk@starnews.in")).unwrap();

        service.add("another").unwrap();

        assert_eq!(
            service.current().unwrap().unwrap().updated_by.as_deref(),
            Some("desk@starnews.in"),
            "structured path carries the last attribution forward"
        );
    }
}
