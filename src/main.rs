use std::time::Duration;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use pg_exporter::config::Config;
use pg_exporter::db::{self, PgExecutor};
use pg_exporter::export::{DataExporter, Exporter};
use pg_exporter::output::{default_filename, save_sql_file};

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    init_tracing(&config);

    if let Err(e) = run(&config).await {
        error!("{}", e);
        if let Some(suggestion) = e.suggestion() {
            error!("Suggestion: {}", suggestion);
        }
        std::process::exit(1);
    }
    Ok(())
}

async fn run(config: &Config) -> pg_exporter::ExportResult<()> {
    let pool = db::connect(
        &config.database_url,
        Duration::from_secs(config.connect_timeout),
    )
    .await?;

    if config.check {
        let version = db::server_version(&pool).await?;
        println!("{}", version);
        pool.close().await;
        return Ok(());
    }

    let executor = PgExecutor::new(pool);

    if config.list_tables {
        let data = DataExporter::new(&executor);
        let summaries = data.table_summaries(&config.schema).await?;
        println!(
            "{}",
            serde_json::to_string_pretty(&summaries)
                .map_err(|e| pg_exporter::ExportError::internal(e.to_string()))?
        );
        executor.close().await;
        return Ok(());
    }

    let database = config.database_name();
    let exporter = Exporter::new(&executor, &database)
        .schema(&config.schema)
        .batch_size(config.batch_size);
    let document = exporter.export(config.mode, config.tables_opt()).await?;
    executor.close().await;

    let path = config
        .output
        .clone()
        .unwrap_or_else(|| default_filename(&database, config.mode));
    save_sql_file(&path, &document)?;
    Ok(())
}
