use std::net::SocketAddr;

use todo_file_api::application::todo_service::TodoServiceImpl;
use todo_file_api::http::routes::todos;
use todo_file_api::http::routing;
use todo_file_api::infrastructure::document_store::DocumentStore;
use todo_file_api::infrastructure::file_repo::FileTodoRepository;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let data_path = std::env::var("DATA_PATH").unwrap_or_else(|_| "data.json".to_string());
    prepare_data_dir(&data_path)?;
    let store = DocumentStore::new(&data_path);
    let repo = FileTodoRepository::new(store);
    let service = TodoServiceImpl::new(repo);
    let todos_router = todos::router(todos::AppState { service });
    let router = routing::app(todos_router);

    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    tracing::info!(%addr, path = %data_path, "listening");
    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal::ctrl_c;
    let _ = ctrl_c().await;
    tracing::info!("shutdown");
}

fn prepare_data_dir(data_path: &str) -> anyhow::Result<()> {
    if let Some(parent) = std::path::Path::new(data_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
