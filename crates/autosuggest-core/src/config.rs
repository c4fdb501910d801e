//! Per-text-box tuning knobs.

use std::time::Duration;

use serde::Deserialize;

/// Vertical gap between the caret top and an overlay opened below it.
pub const DEFAULT_GAP: f64 = 15.0;

/// How long a blur waits before hiding the overlay.
pub const DEFAULT_FOCUS_LEAVE_DELAY: Duration = Duration::from_millis(150);

/// Configuration for one autosuggest text box.
///
/// Deserializable so hosts can ship it alongside their panel configuration:
///
/// ```json
/// { "gap": 15.0, "focus_leave_delay_ms": 150, "clamp_to_viewport": false }
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Pixel gap between caret and an overlay placed below it.
    pub gap: f64,
    /// Delay between focus loss and hiding the overlay.
    #[serde(rename = "focus_leave_delay_ms", with = "millis")]
    pub focus_leave_delay: Duration,
    /// Shift the overlay back into the viewport after quadrant placement.
    pub clamp_to_viewport: bool,
    /// Class toggled on the overlay list while it is visible.
    pub active_class: String,
    /// Class of the overlay list element.
    pub list_class: String,
    /// Class of a single overlay entry.
    pub item_class: String,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            gap: DEFAULT_GAP,
            focus_leave_delay: DEFAULT_FOCUS_LEAVE_DELAY,
            clamp_to_viewport: false,
            active_class: "active".to_string(),
            list_class: "bpp-autosuggest-list".to_string(),
            item_class: "bpp-autosuggest-item".to_string(),
        }
    }
}

impl SuggestConfig {
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_focus_leave_delay(mut self, delay: Duration) -> Self {
        self.focus_leave_delay = delay;
        self
    }

    pub fn with_clamp_to_viewport(mut self, clamp: bool) -> Self {
        self.clamp_to_viewport = clamp;
        self
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SuggestConfig::default();
        assert_eq!(config.gap, 15.0);
        assert_eq!(config.focus_leave_delay, Duration::from_millis(150));
        assert!(!config.clamp_to_viewport);
        assert_eq!(config.active_class, "active");
    }

    #[test]
    fn test_deserialize_partial() {
        let config: SuggestConfig =
            serde_json::from_str(r#"{ "focus_leave_delay_ms": 300, "clamp_to_viewport": true }"#)
                .unwrap();
        assert_eq!(config.focus_leave_delay, Duration::from_millis(300));
        assert!(config.clamp_to_viewport);
        assert_eq!(config.gap, DEFAULT_GAP);
        assert_eq!(config.list_class, "bpp-autosuggest-list");
    }

    #[test]
    fn test_builder() {
        let config = SuggestConfig::default()
            .with_gap(4.0)
            .with_focus_leave_delay(Duration::from_millis(10));
        assert_eq!(config.gap, 4.0);
        assert_eq!(config.focus_leave_delay, Duration::from_millis(10));
    }
}
