mod callback;
mod chart;
mod config;
mod dashboard;
mod dataset;
mod figure;
mod filter;
mod layout;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = config::Config::default();
    let dashboard = dashboard::Dashboard::from_config(&config).expect("dashboard init failed");
    let state = state::AppState::new(dashboard);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("failed to bind");

    tracing::info!(addr = %config.addr, "sales dashboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
