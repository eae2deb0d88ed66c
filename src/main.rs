// Prevents additional console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod ui;

use std::{cell::RefCell, rc::Rc};

use hamlog::{
    config::{AppConfig, CONFIG_FILE, ConfigError},
    editor::controller::{EditorError, LogEditor},
    persist::{StoreError, sqlite::SqliteContactStore},
};

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("contact log: {0}")]
    Store(#[from] StoreError),
    #[error("editor: {0}")]
    Editor(#[from] EditorError),
    #[error("window: {0}")]
    Ui(#[from] eframe::Error),
}

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("hamlog=info"))
        .init();

    let config = AppConfig::load_or_default(CONFIG_FILE)?;
    let store = SqliteContactStore::open(&config.db_path)?;
    let editor = LogEditor::new(store)?;
    log::info!(
        "opened {} with {} contacts",
        config.db_path.display(),
        editor.rows().len()
    );

    let fatal = Rc::new(RefCell::new(None));
    ui::run(&config, editor, Rc::clone(&fatal))?;

    if let Some(err) = fatal.take() {
        return Err(err.into());
    }
    Ok(())
}
