use horta_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    horta_observability::init();

    let config = ApiConfig::from_env();
    let app = horta_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
