use crate::utils::{Method, Metrics, Status};
use tokio::time::Instant;
use tracing::{Span, error, info, info_span};

/// Span plus start time for one service operation.
pub struct TracingContext {
    pub span: Span,
    pub start_time: Instant,
}

impl TracingContext {
    pub fn start(component: &'static str, operation: &'static str) -> Self {
        let span = info_span!("service", component, operation);
        span.in_scope(|| info!("Starting operation: {operation}"));

        Self {
            span,
            start_time: Instant::now(),
        }
    }

    pub fn complete_success(&self, metrics: &Metrics, method: Method, message: &str) {
        self.complete(metrics, method, true, message);
    }

    pub fn complete_error(&self, metrics: &Metrics, method: Method, message: &str) {
        self.complete(metrics, method, false, message);
    }

    fn complete(&self, metrics: &Metrics, method: Method, is_success: bool, message: &str) {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        let status = if is_success {
            Status::Success
        } else {
            Status::Error
        };

        self.span.in_scope(|| {
            if is_success {
                info!(duration_secs = elapsed, "Operation completed successfully: {message}");
            } else {
                error!(duration_secs = elapsed, "Operation failed: {message}");
            }
        });

        metrics.record(method, status, elapsed);
    }
}
