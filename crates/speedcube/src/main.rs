//! 3x3x3 puzzle cube simulator.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use cubeprefs::Preferences;

mod cli;
mod gui;

const TITLE: &str = "Speedcube";
const APP_ID: &str = "Speedcube";

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    if let Some(subcommand) = args.subcommand {
        color_eyre::install()?;
        cli::exec(subcommand, args.prefs.as_deref())?;
        return Ok(());
    }

    // Initialize logging.
    env_logger::builder().init();

    color_eyre::install()?;

    let prefs_path = match args.prefs {
        Some(path) => Some(path),
        None => cubeprefs::paths::prefs_file()
            .inspect_err(|e| log::warn!("Error locating user preferences: {e}"))
            .ok()
            .map(PathBuf::from),
    };
    let prefs = Preferences::load(prefs_path.as_deref());

    run(prefs, prefs_path).map_err(|e| eyre::eyre!("error running GUI: {e}"))
}

fn run(prefs: Preferences, prefs_path: Option<PathBuf>) -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_app_id(APP_ID)
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        native_options,
        Box::new(|_cc| Ok(Box::new(gui::AppUi::new(prefs, prefs_path)))),
    )
}

impl eframe::App for gui::AppUi {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Build all the UI.
        self.build(ctx);
    }

    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        self.save_prefs_if_needed();
    }

    fn auto_save_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(5)
    }

    fn on_exit(&mut self) {
        self.save_prefs_if_needed();
    }
}
