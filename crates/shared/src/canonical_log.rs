//! # Canonical Log Line ミドルウェア
//!
//! リクエスト完了時に、メソッド・パス・ステータス・レイテンシを 1 行に
//! まとめたサマリログを出力する tower Layer。
//!
//! TraceLayer の内側に置くと、TraceLayer が作るスパンの中で出力される:
//!
//! ```text
//! TraceLayer → CanonicalLogLineLayer → CatchPanicLayer → handler
//! ```
//!
//! ヘルスチェック（`/health` 配下）は対象外。

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Instant,
};

use http::{Method, Request, Response};
use tower::{Layer, Service};

fn is_excluded(path: &str) -> bool {
    path == "/health" || path.starts_with("/health/")
}

/// Canonical Log Line を出力する Layer
#[derive(Clone, Copy, Debug, Default)]
pub struct CanonicalLogLineLayer;

impl<S> Layer<S> for CanonicalLogLineLayer {
    type Service = CanonicalLogLineService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CanonicalLogLineService { inner }
    }
}

#[derive(Clone, Debug)]
pub struct CanonicalLogLineService<S> {
    inner: S,
}

/// 完了したリクエストの要約
struct RequestSummary {
    method: Method,
    path:   String,
    start:  Instant,
}

impl RequestSummary {
    fn emit<ResBody, E: std::fmt::Display>(&self, result: &Result<Response<ResBody>, E>) {
        let latency_ms = u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX);
        match result {
            Ok(response) if response.status().is_server_error() => tracing::warn!(
                log.r#type = "canonical",
                http.method = %self.method,
                http.path = %self.path,
                http.status_code = response.status().as_u16(),
                http.latency_ms = latency_ms,
                "リクエスト完了"
            ),
            Ok(response) => tracing::info!(
                log.r#type = "canonical",
                http.method = %self.method,
                http.path = %self.path,
                http.status_code = response.status().as_u16(),
                http.latency_ms = latency_ms,
                "リクエスト完了"
            ),
            Err(err) => tracing::error!(
                log.r#type = "canonical",
                http.method = %self.method,
                http.path = %self.path,
                http.latency_ms = latency_ms,
                error.message = %err,
                "リクエスト処理エラー"
            ),
        }
    }
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for CanonicalLogLineService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: std::fmt::Display + 'static,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;
    type Response = S::Response;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        // poll_ready 済みの inner を取り出し、代わりにクローンを残す
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        if is_excluded(req.uri().path()) {
            return Box::pin(inner.call(req));
        }

        let summary = RequestSummary {
            method: req.method().clone(),
            path:   req.uri().path().to_owned(),
            start:  Instant::now(),
        };

        Box::pin(async move {
            let result = inner.call(req).await;
            summary.emit(&result);
            result
        })
    }
}
