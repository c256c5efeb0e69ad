use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use indicator_core::SourceUrl;
use services::{CancellationToken, ProductFeedService};

use crate::context::AppContext;
use crate::views::{FeedState, FeedView};

/// Outcome of a finished load, tagged with the URL it was fetched from.
#[derive(Clone, Debug, PartialEq)]
pub(super) struct LoadedFeed {
    url: SourceUrl,
    state: FeedState,
}

/// The one request allowed in flight per widget.
///
/// Every request token is a child of `root`, so cancelling `root` on unmount
/// reaches whichever request is active.
#[derive(Debug, Default)]
pub(super) struct FeedRequests {
    root: CancellationToken,
    active: Option<(SourceUrl, CancellationToken)>,
}

impl FeedRequests {
    /// Token for a new request when `url` differs from the active one.
    /// The previous request, if any, is cancelled.
    pub(super) fn begin(&mut self, url: &SourceUrl) -> Option<CancellationToken> {
        if self.active.as_ref().is_some_and(|(active, _)| active == url) {
            return None;
        }
        let token = self.root.child_token();
        if let Some((_, previous)) = self.active.replace((url.clone(), token.clone())) {
            previous.cancel();
        }
        Some(token)
    }

    pub(super) fn cancel_all(&self) {
        self.root.cancel();
    }
}

/// Fetches the product list on mount and again whenever `url` changes.
///
/// Requests are cancelled when superseded or when the component unmounts; a
/// cancelled load never writes to the signal.
pub(super) fn use_product_feed(url: SourceUrl) -> FeedView {
    let ctx = use_context::<AppContext>();
    let loaded = use_signal(|| None::<LoadedFeed>);
    let requests = use_hook(|| Rc::new(RefCell::new(FeedRequests::default())));

    use_drop({
        let requests = Rc::clone(&requests);
        move || requests.borrow().cancel_all()
    });

    let started = requests.borrow_mut().begin(&url);
    if let Some(cancel) = started {
        spawn_load(ctx.product_feed(), url.clone(), cancel, loaded);
    }

    view_for(loaded.read().as_ref(), &url)
}

fn spawn_load(
    service: Arc<ProductFeedService>,
    url: SourceUrl,
    cancel: CancellationToken,
    mut loaded: Signal<Option<LoadedFeed>>,
) {
    spawn(async move {
        let outcome = service.load(&url, &cancel).await;
        if cancel.is_cancelled() {
            return;
        }
        let mut state = FeedState::loading();
        match outcome {
            Ok(products) => state.succeed(&products),
            Err(err) => {
                error!(%url, error = %err, "failed to load products");
                state.fail(err.to_string());
            }
        }
        loaded.set(Some(LoadedFeed { url, state }));
    });
}

/// A result for another URL is stale: the request for `url` is still loading.
pub(super) fn view_for(loaded: Option<&LoadedFeed>, url: &SourceUrl) -> FeedView {
    match loaded {
        Some(feed) if &feed.url == url => feed.state.view(),
        _ => FeedView::Loading,
    }
}
