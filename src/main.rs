use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use pocketlab::domain::ports::Accelerometer;
use pocketlab::infrastructure::{
    AppConfig, CliArgs, GeoClient, IioAccelerometer, PlaceholderClient, StorageManager,
    SyntheticAccelerometer, TomlProfileStore,
};
use pocketlab::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn pick_sensor(config: &AppConfig) -> Option<Arc<dyn Accelerometer>> {
    if let Some(sensor) = IioAccelerometer::discover() {
        info!("Using iio accelerometer");
        return Some(Arc::new(sensor));
    }

    if config.sensor.synthetic_fallback {
        info!("No hardware accelerometer, using synthetic fallback");
        return Some(Arc::new(SyntheticAccelerometer::new()));
    }

    info!("No accelerometer available");
    None
}

fn create_app() -> Result<App> {
    let args = CliArgs::parse();

    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);

    init_logging(&config)?;

    info!(version = pocketlab::VERSION, "Starting pocketlab");

    let locator = Arc::new(GeoClient::new(config.location.consent)?);
    let profile_store = Arc::new(TomlProfileStore::new(storage));
    let api_client = Arc::new(PlaceholderClient::new(&config.api)?);
    let sensor_source = pick_sensor(&config);
    let sensor_interval = Duration::from_millis(config.sensor.interval_ms.max(1));

    Ok(App::new(
        locator,
        profile_store,
        api_client,
        sensor_source,
        sensor_interval,
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
