use axum::{body::Body, http::Request, response::Response};
use opentelemetry::{
    global,
    trace::{SpanKind, TraceContextExt, Tracer},
    Context, KeyValue,
};
use opentelemetry_otlp::{WithExportConfig, WithTonicConfig};
use std::{
    future::Future,
    pin::Pin,
    sync::OnceLock,
    task::{Context as TaskContext, Poll},
};
use tower::{Layer, Service};

use crate::auth::jwt::Claims;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const TRACER_NAME: &str = "student-living";

static LOGGER_PROVIDER: OnceLock<opentelemetry_sdk::logs::SdkLoggerProvider> = OnceLock::new();

/// Runtime for the tonic exporters, which spawn onto tokio when built.
static OTEL_RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

/// Register OTLP trace and log exporters.
///
/// Dioxus owns the `tracing` subscriber; this only installs the global
/// tracer provider used by [`OtelTraceLayer`] and bridges the `log` crate.
///
/// Environment:
///   - `OTEL_EXPORTER_OTLP_ENDPOINT`: collector gRPC address; nothing is
///     exported when unset
///   - `OTEL_SERVICE_NAME` (default `student-living`)
///   - `DEPLOY_ENV` (default `development`)
pub fn init_telemetry() {
    let _ = dotenvy::dotenv();

    let Ok(endpoint) = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT") else {
        tracing::info!("OTEL_EXPORTER_OTLP_ENDPOINT not set, skipping OTLP export");
        return;
    };

    let service_name =
        std::env::var("OTEL_SERVICE_NAME").unwrap_or_else(|_| TRACER_NAME.to_string());
    let environment = std::env::var("DEPLOY_ENV").unwrap_or_else(|_| "development".to_string());

    if OTEL_RUNTIME.get().is_none() {
        match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .worker_threads(1)
            .build()
        {
            Ok(rt) => {
                let _ = OTEL_RUNTIME.set(rt);
            }
            Err(e) => {
                tracing::error!(error = %e, "could not start telemetry runtime");
                return;
            }
        }
    }
    let Some(rt) = OTEL_RUNTIME.get() else {
        return;
    };
    let _guard = rt.enter();

    let tls = endpoint.starts_with("https://");

    let mut span_builder = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&endpoint);
    if tls {
        span_builder = span_builder.with_tls_config(
            opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots(),
        );
    }
    let span_exporter = match span_builder.build() {
        Ok(e) => e,
        Err(e) => {
            tracing::error!(error = %e, "could not build OTLP span exporter");
            return;
        }
    };

    let resource = opentelemetry_sdk::Resource::builder()
        .with_service_name(service_name)
        .with_attribute(KeyValue::new("service.version", APP_VERSION))
        .with_attribute(KeyValue::new("deployment.environment", environment))
        .build();

    let provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
        .with_batch_exporter(span_exporter)
        .with_resource(resource.clone())
        .build();
    global::set_tracer_provider(provider);

    let mut log_builder = opentelemetry_otlp::LogExporter::builder()
        .with_tonic()
        .with_endpoint(&endpoint);
    if tls {
        log_builder = log_builder.with_tls_config(
            opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots(),
        );
    }
    match log_builder.build() {
        Ok(log_exporter) => {
            let logger_provider = opentelemetry_sdk::logs::SdkLoggerProvider::builder()
                .with_batch_exporter(log_exporter)
                .with_resource(resource)
                .build();
            let provider = LOGGER_PROVIDER.get_or_init(|| logger_provider);
            let bridge = opentelemetry_appender_log::OpenTelemetryLogBridge::new(provider);
            if log::set_boxed_logger(Box::new(bridge)).is_ok() {
                log::set_max_level(log::LevelFilter::Info);
            } else {
                tracing::info!("log crate logger already set, OTLP log bridge skipped");
            }
        }
        Err(e) => tracing::warn!(error = %e, "could not build OTLP log exporter"),
    }

    tracing::info!(version = APP_VERSION, %endpoint, "telemetry exporting");
}

/// Client platform from an explicit `X-Client-Platform` header, else a
/// User-Agent guess. Native clients send no User-Agent.
fn detect_platform(ua: &str, explicit: Option<&str>) -> &'static str {
    if let Some(p) = explicit {
        return match p {
            "ios" => "ios",
            "android" => "android",
            "desktop" => "desktop",
            "web" => "web",
            _ => "unknown",
        };
    }

    if ua.is_empty() || ua == "unknown" {
        "native"
    } else if ua.contains("iPhone") || ua.contains("iPad") {
        "ios"
    } else if ua.contains("Android") {
        "android"
    } else if ua.contains("Mozilla") {
        "web"
    } else {
        "native"
    }
}

/// Span name path with ids collapsed, so `/api/notifications/<uuid>/read`
/// groups under `/api/notifications/{id}/read`.
fn route_template(path: &str) -> String {
    path.split('/')
        .map(|seg| {
            let is_id = uuid::Uuid::parse_str(seg).is_ok()
                || (!seg.is_empty() && seg.chars().all(|c| c.is_ascii_digit()));
            if is_id {
                "{id}"
            } else {
                seg
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// One server span per HTTP request, tagged with the caller when the auth
/// middleware resolved one.
#[derive(Clone)]
pub struct OtelTraceLayer;

impl<S> Layer<S> for OtelTraceLayer {
    type Service = OtelTraceService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        OtelTraceService { inner }
    }
}

#[derive(Clone)]
pub struct OtelTraceService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for OtelTraceService<S>
where
    S: Service<Request<Body>, Response = Response> + Send + Clone + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let tracer = global::tracer(TRACER_NAME);
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let user_agent = header("user-agent").unwrap_or_default();
        let platform = detect_platform(&user_agent, header("x-client-platform").as_deref());
        let request_id = header("x-request-id").unwrap_or_default();

        let mut attributes = vec![
            KeyValue::new("http.method", method.clone()),
            KeyValue::new("http.target", path.clone()),
            KeyValue::new("http.user_agent", user_agent),
            KeyValue::new("client.platform", platform),
            KeyValue::new("http.request_id", request_id),
        ];
        match req.extensions().get::<Claims>() {
            Some(claims) => attributes.extend([
                KeyValue::new("user.id", claims.sub),
                KeyValue::new("user.role", claims.role.clone()),
                KeyValue::new("auth.status", "authenticated"),
            ]),
            None => attributes.push(KeyValue::new("auth.status", "anonymous")),
        }

        let span = tracer
            .span_builder(format!("{method} {}", route_template(&path)))
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        let cx = Context::current_with_span(span);
        let mut inner = self.inner.clone();

        let guard = cx.clone().attach();
        let future = inner.call(req);
        drop(guard);

        Box::pin(async move {
            let response = future.await?;

            let span = cx.span();
            let status = response.status();
            span.set_attribute(KeyValue::new("http.status_code", status.as_u16() as i64));
            if status.is_server_error() {
                span.set_status(opentelemetry::trace::Status::error(status.to_string()));
            }

            Ok(response)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_header_wins() {
        assert_eq!(detect_platform("Mozilla/5.0 Chrome", Some("ios")), "ios");
        assert_eq!(detect_platform("", Some("desktop")), "desktop");
        assert_eq!(detect_platform("", Some("smartwatch")), "unknown");
    }

    #[test]
    fn user_agent_heuristics() {
        assert_eq!(detect_platform("", None), "native");
        assert_eq!(detect_platform("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0)", None), "ios");
        assert_eq!(detect_platform("Mozilla/5.0 (Linux; Android 14; Pixel 8)", None), "android");
        assert_eq!(detect_platform("Mozilla/5.0 (X11; Linux x86_64)", None), "web");
        assert_eq!(detect_platform("curl/8.4.0", None), "native");
    }

    #[test]
    fn ids_collapse_in_route_template() {
        assert_eq!(
            route_template("/api/notifications/6f1c2a9e-6a55-4a0e-9a64-0f1f4d7c5b10/read"),
            "/api/notifications/{id}/read"
        );
        assert_eq!(route_template("/api/maintenance-requests"), "/api/maintenance-requests");
        assert_eq!(route_template("/users/42"), "/users/{id}");
    }
}
