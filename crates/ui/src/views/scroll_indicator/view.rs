use dioxus::prelude::*;
use indicator_core::SourceUrl;
use indicator_core::model::ScrollPercentage;

use super::feed::use_product_feed;
use super::scroll::use_scroll_percentage;
use crate::views::FeedView;
use crate::vm::ProductRowVm;

const LOADING_TEXT: &str = "Loading data...";

#[component]
pub fn ScrollIndicator(url: SourceUrl) -> Element {
    let view = use_product_feed(url);
    let percentage = use_scroll_percentage();

    match view {
        FeedView::Loading => rsx! {
            div { class: "loading", "{LOADING_TEXT}" }
        },
        FeedView::Error(message) => rsx! {
            div { class: "error", "{message}" }
        },
        FeedView::Ready(rows) => rsx! {
            IndicatorPanel { percentage: percentage(), rows }
        },
    }
}

/// Header with the progress bar, followed by the product titles.
#[component]
pub fn IndicatorPanel(percentage: ScrollPercentage, rows: Vec<ProductRowVm>) -> Element {
    let width = percentage.css_width();

    rsx! {
        div { class: "top-nav",
            h1 { "Scroll Indicator" }
            div { class: "scroll-progress",
                div { class: "current-progress", style: "width: {width}" }
            }
        }
        div { class: "data-list",
            for row in rows {
                p { key: "{row.key}", "{row.title}" }
            }
        }
    }
}
