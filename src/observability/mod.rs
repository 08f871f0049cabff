//! 可观测性模块
//!
//! 提供请求指标、结构化日志和健康检查。

use axum::{Json, Router, response::IntoResponse, routing::get};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::config::LoggingConfig;
use crate::error::AppError;

// ===== Simple Metrics =====

/// 被统计的端点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    MindMap,
    Study,
}

/// 简单应用指标
#[derive(Debug, Default)]
pub struct AppMetrics {
    pub mindmap_requests_total: AtomicU64,
    pub study_requests_total: AtomicU64,
    pub request_duration_ms_sum: AtomicU64,
    pub errors_total: AtomicU64,
    pub upstream_rate_limited_total: AtomicU64,
    pub upstream_payment_required_total: AtomicU64,
    pub invalid_action_total: AtomicU64,
}

impl AppMetrics {
    /// 开始统计一次请求
    pub fn start(self: &Arc<Self>, endpoint: Endpoint) -> RequestTimer {
        match endpoint {
            Endpoint::MindMap => self.mindmap_requests_total.fetch_add(1, Ordering::Relaxed),
            Endpoint::Study => self.study_requests_total.fetch_add(1, Ordering::Relaxed),
        };

        RequestTimer {
            metrics: Arc::clone(self),
            started: Instant::now(),
        }
    }

    /// 记录错误
    pub fn record_error(&self, error: &AppError) {
        self.errors_total.fetch_add(1, Ordering::Relaxed);
        let counter = match error {
            AppError::UpstreamRateLimited => &self.upstream_rate_limited_total,
            AppError::UpstreamPaymentRequired => &self.upstream_payment_required_total,
            AppError::InvalidAction(_) => &self.invalid_action_total,
            _ => return,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// 生成 Prometheus 格式指标
    pub fn gather(&self) -> String {
        let mindmap = self.mindmap_requests_total.load(Ordering::Relaxed);
        let study = self.study_requests_total.load(Ordering::Relaxed);
        format!(
            r#"# HELP studymate_requests_total Generation requests by endpoint
# TYPE studymate_requests_total counter
studymate_requests_total{{endpoint="generate-mindmap"}} {}
studymate_requests_total{{endpoint="study-helper"}} {}
# HELP studymate_request_duration_seconds Generation request duration in seconds
# TYPE studymate_request_duration_seconds summary
studymate_request_duration_seconds_sum {}
studymate_request_duration_seconds_count {}
# HELP studymate_errors_total Failed generation requests
# TYPE studymate_errors_total counter
studymate_errors_total {}
# HELP studymate_upstream_rate_limited_total Gateway replies with status 429
# TYPE studymate_upstream_rate_limited_total counter
studymate_upstream_rate_limited_total {}
# HELP studymate_upstream_payment_required_total Gateway replies with status 402
# TYPE studymate_upstream_payment_required_total counter
studymate_upstream_payment_required_total {}
# HELP studymate_invalid_action_total Study requests with an unknown action
# TYPE studymate_invalid_action_total counter
studymate_invalid_action_total {}
"#,
            mindmap,
            study,
            self.request_duration_ms_sum.load(Ordering::Relaxed) as f64 / 1000.0,
            mindmap + study,
            self.errors_total.load(Ordering::Relaxed),
            self.upstream_rate_limited_total.load(Ordering::Relaxed),
            self.upstream_payment_required_total.load(Ordering::Relaxed),
            self.invalid_action_total.load(Ordering::Relaxed),
        )
    }
}

/// 单次请求的计时
pub struct RequestTimer {
    metrics: Arc<AppMetrics>,
    started: Instant,
}

impl RequestTimer {
    pub fn finish(self, error: Option<&AppError>) {
        let elapsed = self.started.elapsed().as_millis() as u64;
        self.metrics
            .request_duration_ms_sum
            .fetch_add(elapsed, Ordering::Relaxed);
        if let Some(error) = error {
            self.metrics.record_error(error);
        }
    }
}

// ===== Health Check =====

/// 健康检查状态
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub uptime_seconds: f64,
}

/// 可观测性状态
#[derive(Clone)]
pub struct ObservabilityState {
    pub metrics: Arc<AppMetrics>,
    pub start_time: DateTime<Utc>,
    pub version: String,
}

impl ObservabilityState {
    pub fn new(version: String, metrics: Arc<AppMetrics>) -> Self {
        Self {
            metrics,
            start_time: Utc::now(),
            version,
        }
    }

    /// 获取应用正常运行时间
    pub fn uptime_seconds(&self) -> f64 {
        (Utc::now() - self.start_time).num_seconds() as f64
    }
}

/// 获取健康状态
pub async fn health_check(
    state: axum::extract::State<Arc<ObservabilityState>>,
) -> impl IntoResponse {
    Json(HealthStatus {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        version: state.version.clone(),
        uptime_seconds: state.uptime_seconds(),
    })
}

/// 简单存活检查
pub async fn liveness() -> impl IntoResponse {
    "OK"
}

/// Prometheus 指标端点
pub async fn metrics(state: axum::extract::State<Arc<ObservabilityState>>) -> impl IntoResponse {
    (axum::http::StatusCode::OK, state.metrics.gather())
}

/// 版本信息端点
pub async fn version(state: axum::extract::State<Arc<ObservabilityState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "version": state.version,
        "uptime_seconds": state.uptime_seconds(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// 创建可观测性路由
pub fn create_observability_router(state: Arc<ObservabilityState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness))
        .route("/metrics", get(metrics))
        .route("/version", get(version))
        .with_state(state)
}

// ===== Structured Logging =====

/// 初始化结构化日志
///
/// RUST_LOG 优先于配置中的级别。配置了 `log_dir` 时同时写入按天滚动的日志文件，
/// 返回的 guard 必须存活到进程结束。
pub fn init_tracing(
    service_name: &str,
    config: &LoggingConfig,
) -> Result<Option<WorkerGuard>, Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("{},{}={}", config.level, service_name, config.level)))?;

    let (file_writer, guard) = match &config.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, format!("{}.log", service_name));
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.structured {
        registry
            .with(fmt::layer().json().with_target(true).with_line_number(true))
            .with(file_writer.map(|w| fmt::layer().json().with_ansi(false).with_writer(w)))
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(file_writer.map(|w| fmt::layer().with_ansi(false).with_writer(w)))
            .try_init()?;
    }

    Ok(guard)
}
