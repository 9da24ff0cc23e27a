use std::time::Duration;

use poem::{
    Endpoint, EndpointExt, Route, Server as PoemServer,
    listener::TcpListener,
    middleware::{NormalizePath, Tracing, TrailingSlash},
};
use poem_openapi::OpenApiService;

use crate::{
    api::{health::routes::Api as HealthApi, product::routes::ProductApi},
    config::app_config::AppConfig,
    setup::{dependency_injection::DependencyContainer, shutdown},
};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let server_url = format!("http://{}", addr);
        let app = build_app(container.health_api, container.product_api, server_url)
            .with(config.cors)
            .with(Tracing);

        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);

        PoemServer::new(TcpListener::bind(&addr))
            .run_with_graceful_shutdown(app, shutdown::signal(), Some(SHUTDOWN_GRACE))
            .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}

/// Routes plus docs. `/api/products/` and `/api/products` reach the same handler.
pub fn build_app(
    health_api: HealthApi,
    product_api: ProductApi,
    server_url: String,
) -> impl Endpoint + use<> {
    let api_service = OpenApiService::new((health_api, product_api), "Products API", "0.1.0")
        .server(server_url);
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest("/", api_service)
        .nest("/docs", ui)
        .nest("/openapi.json", spec)
        .with(NormalizePath::new(TrailingSlash::Trim))
}
