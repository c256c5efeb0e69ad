use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use indicator_core::model::{ScrollMetrics, ScrollPercentage};

use super::scripts::ScrollSubscription;

/// Tracks document scroll progress for as long as the component is mounted.
pub(super) fn use_scroll_percentage() -> Signal<ScrollPercentage> {
    let percentage = use_signal(ScrollPercentage::default);
    let subscription = use_hook(ScrollSubscription::new);

    use_drop({
        let subscription = subscription.clone();
        move || subscription.release()
    });

    use_future(move || {
        let subscription = subscription.clone();
        async move {
            let mut percentage = percentage;
            let mut events = subscription.attach();
            while let Ok(metrics) = events.recv::<ScrollMetrics>().await {
                apply_scroll(&mut percentage, metrics);
            }
            debug!(key = subscription.key(), "scroll subscription closed");
        }
    });

    percentage
}

/// Write the percentage for a scroll event. Returns whether the signal changed.
pub(super) fn apply_scroll(
    percentage: &mut Signal<ScrollPercentage>,
    metrics: ScrollMetrics,
) -> bool {
    let current = *percentage.peek();
    match next_percentage(current, metrics) {
        Some(next) => {
            percentage.set(next);
            true
        }
        None => false,
    }
}

/// New percentage for a scroll event, or `None` when it would not change.
pub(super) fn next_percentage(
    current: ScrollPercentage,
    metrics: ScrollMetrics,
) -> Option<ScrollPercentage> {
    let next = ScrollPercentage::from_metrics(metrics);
    (!current.same_as(next)).then_some(next)
}
