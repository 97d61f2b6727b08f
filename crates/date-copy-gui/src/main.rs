use std::process::ExitCode;

use date_copy::Preferences;
use date_copy_gui::{
    config::{ConfigError, LaunchOptions},
    state::{DateCopyApp, APP_TITLE},
    ui::theme,
};
use eframe::egui;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum LaunchError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to open the window: {0}")]
    Window(#[from] eframe::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options: LaunchOptions = argh::from_env();
    match run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "date copy tool exited with an error");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(options: LaunchOptions) -> Result<(), LaunchError> {
    let preferences: Preferences = options.preferences()?;
    tracing::info!(
        size = preferences.size(),
        leading = preferences.spacing().leading,
        trailing = preferences.spacing().trailing,
        "starting date copy tool"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([420.0, 460.0])
            .with_min_inner_size([240.0, 260.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(move |cc| {
            let app = DateCopyApp::new(preferences);
            theme::install(&cc.egui_ctx, app.theme());
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}
