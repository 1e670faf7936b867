use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use elective_advisor::{
    api::{create_router, AppState},
    config::Config,
    data::CsvCatalogSource,
    services::CourseGraph,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build the course graph once; it is never modified afterwards
    let source = CsvCatalogSource::new(
        &config.courses_path,
        &config.prerequisites_path,
        &config.careers_path,
    );
    let graph = CourseGraph::from_source(&source).await?;

    let state = AppState::new(graph);
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
