//! Background worker persisting click events.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_retry::strategy::FixedInterval;
use tokio_retry::Retry;
use tracing::error;

use crate::domain::click_event::ClickEvent;
use crate::domain::entities::NewClick;
use crate::domain::repositories::StatsRepository;

const RETRY_INTERVAL: Duration = Duration::from_millis(200);
const RETRY_ATTEMPTS: usize = 2;

/// Drains click events from the channel and persists them.
///
/// Each event is retried a bounded number of times on store failure. An event
/// that still fails is dropped: click recording is best-effort and must never
/// back-pressure the redirect path. Drops are logged and counted in the
/// `clicks_failed_total` metric.
///
/// The worker exits when every sender handle has been dropped.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    stats_repository: Arc<dyn StatsRepository>,
) {
    while let Some(event) = rx.recv().await {
        let strategy = FixedInterval::new(RETRY_INTERVAL).take(RETRY_ATTEMPTS);

        let result = Retry::spawn(strategy, || {
            let repository = stats_repository.clone();
            let new_click = NewClick {
                short_url_id: event.short_url_id,
                clicked_at: event.clicked_at,
            };
            async move { repository.record_click(new_click).await }
        })
        .await;

        if let Err(e) = result {
            error!(
                short_url_id = event.short_url_id,
                "Failed to record click: {e}"
            );
            metrics::counter!("clicks_failed_total").increment(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Click;
    use crate::domain::repositories::MockStatsRepository;
    use crate::error::AppError;
    use chrono::Utc;
    use serde_json::json;

    #[tokio::test]
    async fn test_worker_persists_events_until_channel_closes() {
        let mut mock_repo = MockStatsRepository::new();
        mock_repo
            .expect_record_click()
            .withf(|click| click.short_url_id == 42)
            .times(3)
            .returning(|click| Ok(Click::new(1, click.short_url_id, click.clicked_at)));

        let (tx, rx) = mpsc::channel(16);
        let worker = tokio::spawn(run_click_worker(rx, Arc::new(mock_repo)));

        for _ in 0..3 {
            tx.send(ClickEvent::new(42, Utc::now())).await.unwrap();
        }
        drop(tx);

        worker.await.unwrap();
    }

    #[tokio::test]
    async fn test_worker_retries_transient_failures() {
        let mut mock_repo = MockStatsRepository::new();
        let mut calls = 0;
        mock_repo.expect_record_click().times(2).returning(move |c| {
            calls += 1;
            if calls == 1 {
                Err(AppError::unavailable("Store unavailable", json!({})))
            } else {
                Ok(Click::new(1, c.short_url_id, c.clicked_at))
            }
        });

        let (tx, rx) = mpsc::channel(16);
        let worker = tokio::spawn(run_click_worker(rx, Arc::new(mock_repo)));

        tx.send(ClickEvent::new(7, Utc::now())).await.unwrap();
        drop(tx);

        worker.await.unwrap();
    }

    #[tokio::test]
    async fn test_worker_drops_event_after_retry_budget() {
        let mut mock_repo = MockStatsRepository::new();
        mock_repo
            .expect_record_click()
            .times(1 + RETRY_ATTEMPTS)
            .returning(|_| Err(AppError::unavailable("Store unavailable", json!({}))));

        let (tx, rx) = mpsc::channel(16);
        let worker = tokio::spawn(run_click_worker(rx, Arc::new(mock_repo)));

        tx.send(ClickEvent::new(7, Utc::now())).await.unwrap();
        drop(tx);

        // Worker survives the failure and exits cleanly on channel close.
        worker.await.unwrap();
    }
}
