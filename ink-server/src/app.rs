//! Routes and shared state.

use crate::{card::CardSink, error::AppError};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use futures::future::BoxFuture;
use ink_stats::{
    error::Result as StatsResult,
    mode::RefreshRequest,
    stats::YtdStats,
    strava::StravaClient,
    REFRESH_PATH, STATS_PATH,
};
use log::info;
use std::{path::Path, sync::Arc};
use tower_http::services::ServeDir;

/// Page shell that mounts the dashboard bundle.
const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Anything that can produce the current YTD totals.
pub trait StatsSource: Send + Sync {
    fn ytd_stats(&self) -> BoxFuture<'_, StatsResult<YtdStats>>;
}

impl StatsSource for StravaClient {
    fn ytd_stats(&self) -> BoxFuture<'_, StatsResult<YtdStats>> {
        Box::pin(StravaClient::ytd_stats(self))
    }
}

#[derive(Clone)]
pub struct AppState {
    pub stats: Arc<dyn StatsSource>,
    pub card: Arc<dyn CardSink>,
}

pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(index))
        .route(STATS_PATH, get(get_stats))
        .route(REFRESH_PATH, post(post_refresh))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn get_stats(State(state): State<AppState>) -> Result<Json<YtdStats>, AppError> {
    Ok(Json(state.stats.ytd_stats().await?))
}

/// Redraw the card. The body is optional; anything but `{"mode":"dark"}`
/// draws a light card.
async fn post_refresh(State(state): State<AppState>, body: Bytes) -> Result<StatusCode, AppError> {
    let request = RefreshRequest::from_body(&body);
    let stats = state.stats.ytd_stats().await?;
    info!("Refreshing {} card in {:?} mode", stats.year, request.mode);

    let card = state.card.clone();
    tokio::task::spawn_blocking(move || card.publish(&stats, request.mode)).await??;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardError;
    use axum::{body, body::Body, http::Request};
    use ink_stats::{error::StatsError, mode::Mode, stats::ActivityTotals};
    use std::sync::Mutex;
    use tower::ServiceExt;

    struct FixedStats(Option<YtdStats>);

    impl StatsSource for FixedStats {
        fn ytd_stats(&self) -> BoxFuture<'_, StatsResult<YtdStats>> {
            let result = match &self.0 {
                Some(stats) => Ok(stats.clone()),
                None => Err(StatsError::Status {
                    status: 503,
                    url: "https://www.strava.com/api/v3/athletes/42/stats".to_string(),
                }),
            };
            Box::pin(async move { result })
        }
    }

    #[derive(Default)]
    struct RecordingCard {
        published: Mutex<Vec<(YtdStats, Mode)>>,
        fail: bool,
    }

    impl CardSink for RecordingCard {
        fn publish(&self, stats: &YtdStats, mode: Mode) -> Result<(), CardError> {
            if self.fail {
                return Err(CardError::Draw("no fonts".to_string()));
            }
            self.published.lock().unwrap().push((stats.clone(), mode));
            Ok(())
        }
    }

    fn sample() -> YtdStats {
        YtdStats {
            year: 2024,
            run: ActivityTotals { count: 3, distance: 12 },
            ride: ActivityTotals { count: 1, distance: 40 },
            swim: ActivityTotals::default(),
        }
    }

    fn test_app(stats: Option<YtdStats>, card: Arc<RecordingCard>) -> Router {
        let dir = std::env::temp_dir();
        build_router(
            AppState {
                stats: Arc::new(FixedStats(stats)),
                card,
            },
            &dir,
        )
    }

    fn refresh_request(body: &'static str) -> Request<Body> {
        Request::post(REFRESH_PATH)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_refresh_draws_dark_card() {
        let card = Arc::new(RecordingCard::default());
        let app = test_app(Some(sample()), card.clone());

        let response = app.oneshot(refresh_request(r#"{"mode":"dark"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let published = card.published.lock().unwrap();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0], (sample(), Mode::Dark));
    }

    #[tokio::test]
    async fn test_refresh_without_body_draws_light_card() {
        let card = Arc::new(RecordingCard::default());
        let app = test_app(Some(sample()), card.clone());

        let request = Request::post(REFRESH_PATH).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(card.published.lock().unwrap()[0].1, Mode::Light);
    }

    #[tokio::test]
    async fn test_refresh_upstream_failure_is_bad_gateway() {
        let card = Arc::new(RecordingCard::default());
        let app = test_app(None, card.clone());

        let response = app.oneshot(refresh_request(r#"{"mode":"dark"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert!(card.published.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_refresh_card_failure_is_server_error() {
        let card = Arc::new(RecordingCard {
            fail: true,
            ..Default::default()
        });
        let app = test_app(Some(sample()), card);

        let response = app.oneshot(refresh_request(r#"{"mode":"dark"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(body.as_ref(), b"Failed to render card: Drawing failed: no fonts");
    }

    #[tokio::test]
    async fn test_stats_route() {
        let app = test_app(Some(sample()), Arc::new(RecordingCard::default()));

        let request = Request::get(STATS_PATH).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let stats: YtdStats = serde_json::from_slice(&body).unwrap();
        assert_eq!(stats, sample());
    }

    #[tokio::test]
    async fn test_refresh_rejects_get() {
        let app = test_app(Some(sample()), Arc::new(RecordingCard::default()));

        let request = Request::get(REFRESH_PATH).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_index_mounts_dashboard() {
        let app = test_app(Some(sample()), Arc::new(RecordingCard::default()));

        let request = Request::get("/").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains(r#"id="ink-root""#));
    }
}
