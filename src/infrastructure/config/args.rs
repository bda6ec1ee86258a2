use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "pocketlab",
    version,
    about = "A terminal playground of pocket-device and REST API demos",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Base URL of the JSON demo endpoint.
    #[arg(long, value_name = "URL")]
    pub api_base_url: Option<String>,

    /// Grant or deny location access.
    #[arg(long)]
    pub location_consent: Option<bool>,

    /// Accelerometer sampling interval in milliseconds.
    #[arg(long, value_name = "MS")]
    pub sensor_interval_ms: Option<u64>,

    /// Fall back to a synthetic waveform when no hardware sensor exists.
    #[arg(long)]
    pub synthetic_sensor: Option<bool>,
}
