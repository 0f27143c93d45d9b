use std::env;

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_otlp::{SpanExporter, WithExportConfig};
use opentelemetry_sdk::{
    trace::{Sampler, SdkTracerProvider},
    Resource,
};
use tracing::info;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "info,sqlx=warn,hyper=warn,tower=warn,h2=error";

pub fn init_tracing() {
    let is_lambda = env::var("AWS_LAMBDA_FUNCTION_NAME").is_ok();

    let enable_otel = env::var("OTEL_ENABLED")
        .unwrap_or_else(|_| if is_lambda { "true" } else { "false" }.to_string())
        == "true";

    let otel_endpoint = env::var("OTEL_EXPORTER_OTLP_ENDPOINT").unwrap_or_else(|_| {
        if is_lambda {
            "http://127.0.0.1:4318/v1/traces".to_string()
        } else {
            "http://localhost:4318/v1/traces".to_string()
        }
    });

    // Span close events duplicate what the OTLP exporter already records.
    let fmt_layer = if enable_otel {
        fmt::layer().json().with_target(false).boxed()
    } else {
        fmt::layer()
            .json()
            .with_target(false)
            .with_span_events(fmt::format::FmtSpan::CLOSE)
            .boxed()
    };

    let subscriber = tracing_subscriber::registry().with(fmt_layer).with(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    );

    if !enable_otel {
        subscriber.init();
        return;
    }

    match init_opentelemetry(&otel_endpoint) {
        Ok(provider) => {
            opentelemetry::global::set_tracer_provider(provider.clone());
            let tracer = provider.tracer("networth-api");

            subscriber.with(OpenTelemetryLayer::new(tracer)).init();

            info!("OpenTelemetry enabled: {}", otel_endpoint);
        }
        Err(e) => {
            subscriber.init();
            tracing::error!(
                "Failed to initialize OpenTelemetry: {}. Continuing with logs only.",
                e
            );
        }
    }
}

fn init_opentelemetry(endpoint: &str) -> Result<SdkTracerProvider, Box<dyn std::error::Error>> {
    let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
    let service_name = env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| "networth-api".to_string());

    let sampling_rate = env::var("OTEL_TRACE_SAMPLING_RATE")
        .ok()
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.05)
        .clamp(0.0, 1.0);

    let resource = Resource::builder()
        .with_attribute(KeyValue::new("service.name", service_name))
        .with_attribute(KeyValue::new("service.version", env!("CARGO_PKG_VERSION")))
        .with_attribute(KeyValue::new("deployment.environment", environment))
        .build();

    let exporter = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        SpanExporter::builder()
            .with_http()
            .with_endpoint(endpoint)
            .build()?
    } else {
        SpanExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .build()?
    };

    let provider = SdkTracerProvider::builder()
        .with_resource(resource)
        .with_sampler(Sampler::TraceIdRatioBased(sampling_rate))
        .with_batch_exporter(exporter)
        .build();

    info!("OpenTelemetry sampling rate: {}%", sampling_rate * 100.0);

    Ok(provider)
}
