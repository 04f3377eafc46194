mod ops;
mod types;
mod ui;

use crate::types::catalog::Catalog;
use crate::ui::app::{AppState, DevTankApp};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("devtank=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> eframe::Result<()> {
    init_logger();

    let catalog = Catalog::builtin();
    let app = DevTankApp::new(AppState::new(catalog));

    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "DevTank",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )?;
    Ok(())
}
