use serde::{Deserialize, Serialize};

/// Vertical measurements of the document element at the time of a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    /// Scrollable range: how far the top of the viewport can travel.
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        self.scroll_height - self.client_height
    }
}

/// Scroll progress through the document, in percent.
///
/// Not clamped. Values past 100 (overscroll) pass through, and a document
/// that cannot scroll yields `NaN` at offset 0 and `inf` past it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollPercentage(f64);

impl ScrollPercentage {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn from_metrics(metrics: ScrollMetrics) -> Self {
        Self(metrics.scroll_top / metrics.max_scroll() * 100.0)
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Bitwise equality, so that a repeated `NaN` counts as unchanged.
    #[must_use]
    pub fn same_as(self, other: Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }

    /// CSS length for the progress fill, e.g. `"42.5%"`.
    #[must_use]
    pub fn css_width(self) -> String {
        format!("{}%", self.0)
    }
}
