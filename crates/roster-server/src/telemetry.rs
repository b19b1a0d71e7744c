//! Tracing subscriber setup.
//!
//! Log output is pretty or JSON per `observability.log_format`. With the
//! `otlp` feature, spans are also exported when `observability.otlp_endpoint`
//! is set.

use roster_config::ObservabilityConfig;
use roster_core::{RosterError, RosterResult};
use tracing::{info, Subscriber};
use tracing_subscriber::{
    layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured log level.
pub fn init_telemetry(config: &ObservabilityConfig) -> RosterResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(&config.log_level));

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer(config));

    #[cfg(feature = "otlp")]
    let registry = registry.with(otlp::layer(config)?);

    registry
        .try_init()
        .map_err(|e| RosterError::Internal(format!("Failed to install tracing subscriber: {}", e)))?;

    #[cfg(not(feature = "otlp"))]
    if config.otlp_endpoint.is_some() {
        tracing::warn!("otlp_endpoint is set but this build has no `otlp` feature; spans are not exported");
    }

    info!(
        log_level = %config.log_level,
        log_format = %config.log_format,
        otlp_endpoint = ?config.otlp_endpoint,
        "Telemetry initialized"
    );

    Ok(())
}

/// Flushes pending spans.
pub fn shutdown_telemetry() {
    #[cfg(feature = "otlp")]
    opentelemetry::global::shutdown_tracer_provider();
}

/// Filter applied when `RUST_LOG` is unset.
fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::new(format!("{level},tower_http={level},sqlx=warn"))
}

fn fmt_layer<S>(config: &ObservabilityConfig) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    if config.is_json() {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer().with_target(true).boxed()
    }
}

#[cfg(feature = "otlp")]
mod otlp {
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry::KeyValue;
    use opentelemetry_otlp::WithExportConfig;
    use opentelemetry_sdk::{runtime, trace::TracerProvider, Resource};
    use opentelemetry_semantic_conventions::resource::SERVICE_NAME;
    use roster_config::ObservabilityConfig;
    use roster_core::{RosterError, RosterResult};
    use tracing::Subscriber;
    use tracing_opentelemetry::OpenTelemetryLayer;
    use tracing_subscriber::registry::LookupSpan;

    /// Builds the span export layer, or `None` when no endpoint is configured.
    pub fn layer<S>(
        config: &ObservabilityConfig,
    ) -> RosterResult<Option<OpenTelemetryLayer<S, opentelemetry_sdk::trace::Tracer>>>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        let Some(endpoint) = config.otlp_endpoint.as_deref() else {
            return Ok(None);
        };

        let exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .build()
            .map_err(|e| RosterError::Internal(format!("Failed to create OTLP exporter: {}", e)))?;

        let provider = TracerProvider::builder()
            .with_batch_exporter(exporter, runtime::Tokio)
            .with_resource(Resource::new(vec![KeyValue::new(
                SERVICE_NAME,
                config.service_name.clone(),
            )]))
            .build();

        let tracer = provider.tracer(config.service_name.clone());
        opentelemetry::global::set_tracer_provider(provider);

        Ok(Some(tracing_opentelemetry::layer().with_tracer(tracer)))
    }
}
