use std::fs::File;

use anyhow::{Context, Result};
use simplelog::{Config, LevelFilter, WriteLogger};

mod app;
mod config;

mod domain {
    pub mod entities {
        pub mod order;
        pub mod record;
        pub mod sheet;
    }
}

mod infra {
    pub mod import {
        pub mod csv;
    }
}

mod platform {
    pub mod desktop {
        pub mod timer;
    }
}

mod ui {
    pub mod components {
        pub mod data_table;
    }
    pub mod hooks {
        pub mod debounce;
    }
    pub mod state {
        pub mod table_state;
    }
}

mod usecase {
    pub mod ports {
        pub mod timer;
    }
    pub mod services {
        pub mod debounce;
        pub mod query_service;
    }
}


use crate::app::App;
use crate::config::{default_log_path, default_webview_data_dir, AppConfig};

fn init_logging() -> Result<()> {
    let log_path = default_log_path()?;
    let log_file = File::create(&log_path)
        .with_context(|| format!("failed to create log file: {}", log_path.display()))?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .context("failed to initialize logger")?;
    Ok(())
}

fn main() -> Result<()> {
    if let Err(err) = init_logging() {
        eprintln!("logging disabled: {err:#}");
    }

    let config = AppConfig::from_args(std::env::args_os().skip(1))?;
    let webview_data_dir = default_webview_data_dir()?;
    log::info!(
        "starting with search delay {}ms, source {:?}",
        config.search_delay_ms,
        config.csv_path
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new().with_title(config.window_title.clone()),
                )
                .with_data_directory(webview_data_dir),
        )
        .with_context(config)
        .launch(App);

    Ok(())
}
