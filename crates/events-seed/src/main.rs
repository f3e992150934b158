use anyhow::Context;
use events_config::AppConfig;
use events_seed::{run_seed, PostgresSink, EVENT_DATA};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load().context("Invalid configuration")?;
    log::info!("Seeding {}", config.database.display_target());

    let sink = PostgresSink::connect(&config.database).await?;
    if config.database.create_table {
        if let Err(e) = sink.ensure_table().await {
            log::error!("{}", e);
            sink.pool().close().await;
            return Err(e.into());
        }
    }

    let report = run_seed(sink, EVENT_DATA).await;
    match report.failure {
        None => Ok(()),
        Some(e) => Err(e).with_context(|| {
            format!(
                "Seeding stopped after {} of {} rows",
                report.inserted, report.total
            )
        }),
    }
}
