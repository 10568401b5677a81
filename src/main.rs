use clap::Parser;
use rust_extjs_model_generator::{
    config::{Cli, Settings},
    database_schema::get_database_schema,
    error::GeneratorResult,
};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => {
            tracing::info!("Success");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(&e)
        }
    }
}

async fn run(cli: Cli) -> GeneratorResult<()> {
    let settings = Settings::from_cli(cli)?;

    // The pool is closed inside before any file is written.
    let database_schema = get_database_schema(&settings.schema_name, &settings.connection)
        .await?;

    database_schema.dump(&settings.dump).await
}
