// SPDX-License-Identifier: MPL-2.0
use pan_zoom::app::{self, dialog, Flags};
use pan_zoom::config::{self, Config, DEFAULT_LOG_LEVEL};
use pan_zoom::error::Result;
use pan_zoom::media;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: pan_zoom [--config-dir DIR] [--log LEVEL] [IMAGE]";

struct Args {
    config_dir: Option<String>,
    log_level: Option<String>,
    file_path: Option<PathBuf>,
}

fn parse_args() -> std::result::Result<Args, String> {
    let mut args = pico_args::Arguments::from_env();

    let config_dir = args
        .opt_value_from_str("--config-dir")
        .map_err(|e| e.to_string())?;
    let log_level = args.opt_value_from_str("--log").map_err(|e| e.to_string())?;
    let file_path = image_path(args.finish())?;

    Ok(Args {
        config_dir,
        log_level,
        file_path,
    })
}

/// At most one positional image path; anything flag-like left over is unknown.
fn image_path(free: Vec<OsString>) -> std::result::Result<Option<PathBuf>, String> {
    if let Some(flag) = free
        .iter()
        .find(|arg| arg.to_string_lossy().starts_with('-'))
    {
        return Err(format!("unknown option '{}'", flag.to_string_lossy()));
    }

    let mut paths = free.into_iter();
    let first = paths.next().map(PathBuf::from);
    if paths.next().is_some() {
        return Err("expected at most one image path".to_string());
    }

    Ok(first)
}

/// `RUST_LOG` wins, then `--log`, then the config file, then the default.
fn init_logging(cli_level: Option<&str>, config: &Config) {
    let fallback = cli_level
        .or(config.general.log_level.as_deref())
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn launch(file_path: Option<PathBuf>, config: Config) -> Result<()> {
    let path = match file_path {
        Some(path) => path,
        None => {
            let start_dir = dialog::start_directory();
            tracing::info!(directory = %start_dir.display(), "working directory");

            match dialog::pick_image_file(&start_dir) {
                Some(path) => path,
                None => {
                    tracing::info!("No image file chosen");
                    return Ok(());
                }
            }
        }
    };

    let image = media::load_image(&path)?;

    app::run(Flags {
        image,
        path,
        config,
    })?;

    Ok(())
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    config::init_cli_override(args.config_dir);
    let (config, config_warning) = config::load();

    init_logging(args.log_level.as_deref(), &config);
    if let Some(warning) = config_warning {
        tracing::warn!("{warning}");
    }

    match launch(args.file_path, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
