mod scroll_indicator;
mod state;

#[cfg(test)]
mod view_smoke;

pub use scroll_indicator::{
    IndicatorPanel, IndicatorPanelProps, ScrollIndicator, ScrollIndicatorProps,
};
pub use state::{FeedState, FeedView};
