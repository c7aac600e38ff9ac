// MemLab - Memory Step Lab
// Copyright (C) 2024 Zhuo Zhang and Wuqi Zhang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


//! MemLab - step through how a program uses memory, in the terminal
//!
//! Without `--lesson` the built-in Factory Method lesson is shown.

use clap::Parser;
use eyre::{Result, WrapErr};
use memlab_common::logging;
use memlab_core::{Input, InputOutcome, Lesson, RemountPolicy, Viewer};
use memlab_tui::{Config, Theme};
use std::{fs, path::PathBuf};
use tracing::{info, warn};

/// MemLab Terminal User Interface
#[derive(Debug, Parser)]
#[command(name = "memlab")]
#[command(about = "Interactive memory walkthroughs for design-pattern lessons", version)]
struct Args {
    /// Config file path (uses ~/.memlab.toml if not specified)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Lesson TOML file (built-in Factory Method lesson if not specified)
    #[arg(long)]
    lesson: Option<PathBuf>,

    /// Color theme: midnight, terminal or high_contrast
    #[arg(long)]
    theme: Option<Theme>,

    /// Section state when navigating away: reset or preserve
    #[arg(long)]
    remount: Option<RemountPolicy>,

    /// Section to open at startup (clamped into range)
    #[arg(long, allow_negative_numbers = true)]
    section: Option<i64>,

    /// Memory step to open at startup, if the section has steps (clamped)
    #[arg(long, allow_negative_numbers = true)]
    step: Option<i64>,

    /// Enable mouse support
    #[arg(long)]
    mouse: bool,

    /// Hide the status bar
    #[arg(long)]
    no_status_bar: bool,

    /// Terminal refresh interval in milliseconds
    #[arg(long)]
    refresh_interval: Option<u64>,

    /// Print the composed view as JSON and exit
    #[arg(long)]
    dump: bool,

    /// Write the lesson as TOML to this path and exit
    #[arg(long, value_name = "PATH")]
    export_lesson: Option<PathBuf>,
}

impl Args {
    /// Command-line flags take precedence over the config file
    fn apply_to(&self, config: &mut Config) {
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if let Some(remount) = self.remount {
            config.navigation.remount = remount;
        }
        if let Some(section) = self.section {
            config.navigation.start_section = section;
        }
        if self.mouse {
            config.display.mouse = true;
        }
        if self.no_status_bar {
            config.display.status_bar = false;
        }
        if let Some(interval) = self.refresh_interval {
            config.display.refresh_interval_ms = interval;
        }
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load().unwrap_or_else(|e| {
            warn!("Falling back to default configuration: {e:#}");
            Config::default()
        }),
    };
    args.apply_to(&mut config);
    Ok(config)
}

fn load_lesson(args: &Args) -> Result<Lesson> {
    match &args.lesson {
        Some(path) => Ok(memlab_content::load_from_path(path)?),
        None => Ok(memlab_content::factory_lesson()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // stdout belongs to the terminal UI or the JSON dump, never to logs
    let interactive = !args.dump && args.export_lesson.is_none();
    if interactive {
        let log_file_path = logging::init_file_only_logging("memlab")?;
        eprintln!("MemLab logs: {}", log_file_path.display());
    } else {
        logging::init_logging("memlab", true)?;
    }

    let config = load_config(&args)?;
    let lesson = load_lesson(&args)?;

    if let Some(path) = &args.export_lesson {
        let text = memlab_content::to_toml_string(&lesson)?;
        fs::write(path, text).wrap_err_with(|| format!("Failed to write lesson to {path:?}"))?;
        info!("Exported lesson to {:?}", path);
        return Ok(());
    }

    let mut viewer = Viewer::new(lesson, config.navigation.remount)?;
    viewer.select_section(config.navigation.start_section);
    if let Some(step) = args.step {
        if viewer.apply(Input::SelectStep(step)) == InputOutcome::NotApplicable {
            let section = &viewer.active_section().label;
            warn!("--step ignored: section '{section}' has no memory steps");
        }
    }

    if args.dump {
        let view = memlab_core::compose(&viewer);
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    info!("Starting MemLab TUI");
    match memlab_tui::api::start_tui(viewer, config).await {
        Ok(()) => {
            info!("TUI exited normally");
            Ok(())
        }
        Err(e) => {
            tracing::error!("TUI error: {}", e);
            Err(e)
        }
    }
}
