use networth_api::api::server;

#[cfg(not(feature = "lambda"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    server::run_server().await
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    networth_api::telemetry::init_tracing();

    let app = server::create_app()
        .await
        .map_err(|e| lambda_http::Error::from(e.to_string()))?;

    lambda_http::run(app).await
}
