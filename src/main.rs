use std::sync::Arc;

use propstats::gamelog::{
    GameLogRepository, GameLogStore, InMemoryGameLogRepository, PostgresGameLogRepository,
};
use propstats::{AppError, Config, GameLogSource, MarketTable, PropAggregator, PropRequest};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    // Logs go to stderr, stdout carries the JSON records
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "propstats=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting prop hit-rate batch");

    let config = Config::from_env()?;

    let markets = match &config.markets_path {
        Some(path) => MarketTable::from_path(path)?,
        None => MarketTable::builtin()?,
    };
    info!(markets = markets.len(), "Market table ready");

    let repository: Box<dyn GameLogRepository> = match &config.game_log_source {
        GameLogSource::Postgres(url) => {
            let pool = sqlx::PgPool::connect(url).await?;
            Box::new(PostgresGameLogRepository::new(pool))
        }
        GameLogSource::JsonFile(path) => Box::new(InMemoryGameLogRepository::from_json_path(path)?),
    };

    let store = GameLogStore::new();
    let index = store.reload(repository.as_ref()).await?;

    let requests: Vec<PropRequest> =
        serde_json::from_str(&std::fs::read_to_string(&config.props_path)?)?;
    info!(requests = requests.len(), path = %config.props_path.display(), "Loaded prop requests");

    let aggregator = PropAggregator::builder(Arc::new(markets))
        .with_windows(config.windows.clone())
        .with_current_season(config.current_season.clone())
        .with_under_policy(config.under_policy)
        .build()?;

    let report = aggregator.aggregate_batch(&index, &requests);

    for failure in &report.failures {
        warn!(
            player_id = failure.request.player_id,
            market = %failure.request.market,
            error = %failure.error,
            "Prop request failed"
        );
    }

    println!("{}", serde_json::to_string_pretty(&report.records)?);

    if report.records.is_empty() && !requests.is_empty() {
        error!("No prop records were produced");
    }

    info!(
        records = report.records.len(),
        failures = report.failures.len(),
        "Batch complete"
    );
    Ok(())
}
