use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::logger::tracing::{Level, info};
use indicator_core::AppConfig;
use indicator_core::config::SOURCE_URL_ENV;
use services::ProductFeedService;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidUrl(indicator_core::Error),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidUrl(err) => write!(f, "invalid --url value: {err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct IndicatorApp {
    config: AppConfig,
    product_feed: Arc<ProductFeedService>,
}

impl UiApp for IndicatorApp {
    fn config(&self) -> &AppConfig {
        &self.config
    }

    fn product_feed(&self) -> Arc<ProductFeedService> {
        Arc::clone(&self.product_feed)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  dx serve -p app                       # browser");
    eprintln!("  cargo run -p app --no-default-features --features desktop -- [--url <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --url {}", indicator_core::config::DEFAULT_SOURCE_URL);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {SOURCE_URL_ENV} (read at build time for browser builds)");
}

enum Parsed {
    Run(AppConfig),
    Help,
}

fn parse_args(args: &mut impl Iterator<Item = String>) -> Result<Parsed, ArgsError> {
    let mut url = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--url" => url = Some(require_value(args, "--url")?),
            "--help" | "-h" => return Ok(Parsed::Help),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    let config = AppConfig::resolve(url.as_deref()).map_err(ArgsError::InvalidUrl)?;
    Ok(Parsed::Run(config))
}

#[cfg(feature = "desktop")]
fn launcher() -> LaunchBuilder {
    use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Scroll Indicator")
            .with_always_on_top(false),
    );
    LaunchBuilder::desktop().with_cfg(desktop_cfg)
}

#[cfg(not(feature = "desktop"))]
fn launcher() -> LaunchBuilder {
    LaunchBuilder::new()
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let config = match parse_args(&mut args).inspect_err(|_| print_usage())? {
        Parsed::Run(config) => config,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };

    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    info!(url = %config.source_url(), "starting scroll indicator");

    let app: Arc<dyn UiApp> = Arc::new(IndicatorApp {
        config,
        product_feed: Arc::new(ProductFeedService::http()),
    });
    let context = build_app_context(&app);

    launcher().with_context(context).launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
