mod app;
mod panels;
mod theme;

use amff_core::DashboardConfig;
use anyhow::Context;
use app::AmffDashboardApp;
use eframe::egui;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn load_config() -> anyhow::Result<DashboardConfig> {
    DashboardConfig::from_env().with_context(|| {
        format!(
            "failed to load config from ${}",
            amff_core::CONFIG_ENV_VAR
        )
    })
}

fn main() -> eframe::Result<()> {
    dotenvy::dotenv().ok();

    // Set up file logging to /tmp/amff-dashboard.log
    let file_appender = tracing_appender::rolling::never("/tmp", "amff-dashboard.log");
    let (file_writer, _guard) = tracing_appender::non_blocking(file_appender);

    // Initialize tracing with both stdout and file output
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("amff_core=debug,amff_gui=info")
        }))
        .with(fmt::layer().with_writer(std::io::stdout))
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .init();

    tracing::info!("AMFF-CNN dashboard starting");

    let config = load_config().unwrap_or_else(|e| {
        tracing::warn!("{:#}; using defaults", e);
        DashboardConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([900.0, 600.0])
            .with_title(amff_core::page::TITLE),
        ..Default::default()
    };

    eframe::run_native(
        "AMFF-CNN Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(AmffDashboardApp::new(cc, config)))),
    )
}
