use std::sync::Arc;

use indicator_core::model::{ScrollMetrics, ScrollPercentage};

use super::test_harness::{
    FetchTracker, StubSource, ViewKind, render_panel, setup_view_harness,
};

#[tokio::test(flavor = "current_thread")]
async fn indicator_renders_one_line_per_product_in_order() {
    let mut harness = setup_view_harness(
        ViewKind::Indicator,
        StubSource::Products(vec!["Essence Mascara", "Eyeshadow Palette", "Powder Canister"]),
    );
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert_eq!(html.matches("<p>").count(), 3, "unexpected rows in {html}");
    let first = html.find("Essence Mascara").expect("first title");
    let second = html.find("Eyeshadow Palette").expect("second title");
    let third = html.find("Powder Canister").expect("third title");
    assert!(first < second && second < third, "titles out of order in {html}");
    assert!(html.contains("Scroll Indicator"), "missing header in {html}");
    assert!(!html.contains("Loading data..."), "still loading in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn indicator_decodes_response_body() {
    let mut harness = setup_view_harness(
        ViewKind::Indicator,
        StubSource::Body(r#"{"products":[{"id":1,"title":"iPhone 9"},{"id":2,"title":"iPhone X"}],"total":2}"#),
    );
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("<p>iPhone 9</p>"), "missing first product in {html}");
    assert!(html.contains("<p>iPhone X</p>"), "missing second product in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn indicator_shows_only_placeholder_while_pending() {
    let mut harness = setup_view_harness(ViewKind::Indicator, StubSource::Pending);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Loading data..."), "missing placeholder in {html}");
    assert!(!html.contains("scroll-progress"), "progress bar rendered in {html}");
    assert!(!html.contains("data-list"), "list rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn indicator_shows_only_error_text_on_failure() {
    let mut harness = setup_view_harness(ViewKind::Indicator, StubSource::Body("<html>oops</html>"));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(
        html.contains("response body is not a product list"),
        "missing error in {html}"
    );
    assert!(!html.contains("Loading data..."), "placeholder left in {html}");
    assert!(!html.contains("scroll-progress"), "progress bar rendered in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn indicator_with_empty_body_renders_empty_list() {
    let mut harness = setup_view_harness(ViewKind::Indicator, StubSource::Body("{}"));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("scroll-progress"), "missing progress bar in {html}");
    assert_eq!(html.matches("<p>").count(), 0, "unexpected rows in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unmount_mid_request_aborts_fetch_and_releases_listener() {
    let tracker = Arc::new(FetchTracker::default());
    let mut harness =
        setup_view_harness(ViewKind::Indicator, StubSource::Tracked(Arc::clone(&tracker)));
    harness.rebuild();
    harness.drive_async().await;

    assert!(harness.render().contains("Loading data..."));
    assert_eq!(tracker.started(), 1);
    assert_eq!(tracker.abandoned(), 0);
    assert_eq!(harness.document.attached_listeners(), 1);
    assert_eq!(harness.document.released_listeners(), 0);

    let document = harness.unmount();

    assert_eq!(tracker.abandoned(), 1, "in-flight fetch was not dropped");
    assert_eq!(document.attached_listeners(), 1);
    assert_eq!(document.released_listeners(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn unmount_after_load_releases_listener() {
    let mut harness =
        setup_view_harness(ViewKind::Indicator, StubSource::Products(vec!["Mascara"]));
    harness.rebuild();
    harness.drive_async().await;
    assert!(harness.render().contains("<p>Mascara</p>"));

    let document = harness.unmount();

    assert_eq!(document.attached_listeners(), 1);
    assert_eq!(document.released_listeners(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn unmount_after_failure_releases_listener() {
    let mut harness = setup_view_harness(ViewKind::Indicator, StubSource::Body("not json"));
    harness.rebuild();
    harness.drive_async().await;
    assert!(harness.render().contains("response body is not a product list"));

    let document = harness.unmount();

    assert_eq!(document.attached_listeners(), 1);
    assert_eq!(document.released_listeners(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn root_mounts_a_single_indicator() {
    let mut harness = setup_view_harness(ViewKind::Root, StubSource::Pending);
    harness.rebuild();
    let html = harness.render();

    assert_eq!(html.matches("Loading data...").count(), 1, "expected one widget in {html}");
}

#[test]
fn progress_width_tracks_scroll_offset() {
    let max_scroll = 1200.0;
    for offset in [0.0, 300.0, 600.0, 900.0, 1200.0] {
        let metrics = ScrollMetrics::new(offset, 2000.0, 800.0);
        let html = render_panel(ScrollPercentage::from_metrics(metrics), &["a"]);
        let expected = format!("width: {}%", offset / max_scroll * 100.0);
        assert!(html.contains(&expected), "missing {expected} in {html}");
    }
}

#[test]
fn progress_width_is_nan_when_document_cannot_scroll() {
    let metrics = ScrollMetrics::new(0.0, 800.0, 800.0);
    let html = render_panel(ScrollPercentage::from_metrics(metrics), &[]);
    assert!(html.contains("width: NaN%"), "missing NaN width in {html}");
}
