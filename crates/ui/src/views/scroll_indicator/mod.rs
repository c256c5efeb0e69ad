mod feed;
mod scripts;
mod scroll;
mod view;

pub use view::{IndicatorPanel, IndicatorPanelProps, ScrollIndicator, ScrollIndicatorProps};
