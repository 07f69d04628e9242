use std::{process, sync::Arc};

use ritrova::{
    application::{error::AppError, items::ItemService, repos::ItemsRepo},
    config,
    infra::{
        db::PostgresRepositories,
        error::InfraError,
        http::api::{ApiState, build_api_router},
        telemetry,
    },
};
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (_cli_args, settings) = config::load_with_cli()?;

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    let url = settings.database.url.clone().ok_or_else(|| {
        AppError::from(InfraError::configuration(
            "database.url must be configured (RITROVA_DATABASE__URL or --database-url)",
        ))
    })?;

    let pool =
        PostgresRepositories::connect(&url, settings.database.max_connections.get())
            .await
            .map_err(|err| AppError::from(InfraError::database(err.to_string())))?;
    PostgresRepositories::run_migrations(&pool)
        .await
        .map_err(|err| AppError::from(InfraError::database(err.to_string())))?;

    let repositories = Arc::new(PostgresRepositories::new(pool));
    let items_repo: Arc<dyn ItemsRepo> = repositories.clone();
    let state = ApiState {
        items: Arc::new(ItemService::new(items_repo)),
    };

    let router = build_api_router(state);

    let listener = tokio::net::TcpListener::bind(settings.server.addr)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;
    info!(
        target = "ritrova::server",
        addr = %settings.server.addr,
        "listening",
    );

    axum::serve(listener, router.into_make_service())
        .await
        .map_err(|err| AppError::unexpected(format!("server error: {err}")))?;

    Ok(())
}
