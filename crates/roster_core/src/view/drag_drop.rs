//! Drag-and-drop payload contract.
//!
//! Mirrors the subset of a browser `DataTransfer` the board relies on: typed
//! string entries plus the allowed drop effect.

/// MIME type carrying a person id.
pub const TEXT_PLAIN: &str = "text/plain";

/// Drop effect a drag source allows. Cards only ever restrict to `Move`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropEffect {
    /// Unrestricted; what a fresh payload carries.
    #[default]
    All,
    Move,
}

/// Data carried from a drag source to a drop target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragPayload {
    entries: Vec<(String, String)>,
    pub effect_allowed: DropEffect,
}

impl DragPayload {
    /// Empty payload allowing every effect.
    pub fn new() -> Self {
        Self::default()
    }

    /// Payload with one `text/plain` entry.
    pub fn text_plain(data: impl Into<String>) -> Self {
        let mut payload = Self::new();
        payload.set_data(TEXT_PLAIN, data);
        payload
    }

    /// Stores `data` under `format`, replacing any previous entry in place.
    pub fn set_data(&mut self, format: impl Into<String>, data: impl Into<String>) {
        let format = format.into();
        let data = data.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == format) {
            Some(entry) => entry.1 = data,
            None => self.entries.push((format, data)),
        }
    }

    /// Data stored under `format`, if any.
    pub fn get_data(&self, format: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == format)
            .map(|(_, data)| data.as_str())
    }

    /// Formats in insertion order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(format, _)| format.as_str())
    }

    /// Whether the first declared format is `text/plain`.
    pub fn carries_text_first(&self) -> bool {
        self.types().next() == Some(TEXT_PLAIN)
    }
}

#[cfg(test)]
mod tests {
    use super::{DragPayload, DropEffect, TEXT_PLAIN};

    #[test]
    fn fresh_payload_allows_every_effect() {
        assert_eq!(DragPayload::new().effect_allowed, DropEffect::All);
        assert_eq!(DragPayload::text_plain("0").effect_allowed, DropEffect::All);
    }

    #[test]
    fn set_data_replaces_without_reordering() {
        let mut payload = DragPayload::new();
        payload.set_data(TEXT_PLAIN, "1");
        payload.set_data("text/html", "<b>1</b>");
        payload.set_data(TEXT_PLAIN, "2");

        assert_eq!(payload.get_data(TEXT_PLAIN), Some("2"));
        assert_eq!(
            payload.types().collect::<Vec<_>>(),
            vec![TEXT_PLAIN, "text/html"]
        );
        assert!(payload.carries_text_first());
    }

    #[test]
    fn text_must_be_first_format() {
        let mut payload = DragPayload::new();
        payload.set_data("text/uri-list", "https://example.com");
        payload.set_data(TEXT_PLAIN, "0");
        assert!(!payload.carries_text_first());
        assert!(!DragPayload::new().carries_text_first());
    }
}
