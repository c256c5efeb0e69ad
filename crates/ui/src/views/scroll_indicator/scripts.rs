use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::document::{Eval, eval};

static NEXT_SUBSCRIPTION_ID: AtomicU64 = AtomicU64::new(1);

/// A window `scroll` listener owned by one mounted widget.
///
/// `attach` installs the listener and returns the channel its events arrive
/// on; `release` removes it. Handlers live in `window.__scrollIndicator`
/// under this subscription's key, so re-attaching replaces rather than stacks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollSubscription {
    key: String,
}

impl ScrollSubscription {
    #[must_use]
    pub fn new() -> Self {
        let id = NEXT_SUBSCRIPTION_ID.fetch_add(1, Ordering::Relaxed);
        Self {
            key: format!("scroll-indicator-{id}"),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Install the listener. Each scroll event sends one `ScrollMetrics` payload.
    #[must_use]
    pub fn attach(&self) -> Eval {
        eval(&attach_script(&self.key))
    }

    pub fn release(&self) {
        let _ = eval(&release_script(&self.key));
    }
}

impl Default for ScrollSubscription {
    fn default() -> Self {
        Self::new()
    }
}

pub(super) fn attach_script(key: &str) -> String {
    format!(
        r#"
        const registry = window.__scrollIndicator || (window.__scrollIndicator = {{}});
        const key = {key:?};
        if (registry[key]) {{
            window.removeEventListener("scroll", registry[key]);
        }}
        const handler = () => {{
            const root = document.documentElement;
            dioxus.send({{
                scrollTop: root.scrollTop,
                scrollHeight: root.scrollHeight,
                clientHeight: root.clientHeight,
            }});
        }};
        registry[key] = handler;
        window.addEventListener("scroll", handler);
        await new Promise(() => {{}});
        "#
    )
}

pub(super) fn release_script(key: &str) -> String {
    format!(
        r#"
        const registry = window.__scrollIndicator;
        const key = {key:?};
        if (registry && registry[key]) {{
            window.removeEventListener("scroll", registry[key]);
            delete registry[key];
        }}
        "#
    )
}
