//! World Clock - Main Entry Point
//!
//! This is the desktop application entry point that initializes
//! logging and configuration, then starts the UI event loop.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use worldclock_infrastructure::ClockConfig;
use worldclock_ui::AppWindow;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClockConfig::from_env()?;
    tracing::info!(
        api = %config.api_base_url,
        "Starting World Clock v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Initialize the application window
    let app = AppWindow::new(config)?;

    // Run the event loop (blocks until window closes)
    app.run()?;

    Ok(())
}
