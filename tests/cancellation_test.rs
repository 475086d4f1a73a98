mod common;

use axum::http::StatusCode;
use common::{SURVEY_AVERAGES, THREE_PAYMENTS, spawn_delayed_upstream};
use event_reports::domain::event::EventId;
use event_reports::domain::ports::{PaymentHistorySource, SurveyAverageSource};
use event_reports::error::ReportError;
use event_reports::infrastructure::http::payments::HttpPaymentAdapter;
use event_reports::infrastructure::http::surveys::HttpSurveyAdapter;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

const UPSTREAM_DELAY: Duration = Duration::from_secs(10);

fn event_id() -> EventId {
    "aaaaaaaa-0000-0000-0000-000000000001".parse().unwrap()
}

fn cancel_after(delay: Duration) -> CancellationToken {
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        trigger.cancel();
    });
    cancel
}

#[tokio::test]
async fn test_cancel_aborts_slow_payment_call() {
    let upstream = spawn_delayed_upstream(StatusCode::OK, THREE_PAYMENTS, UPSTREAM_DELAY).await;
    let adapter = HttpPaymentAdapter::new(&upstream.base_url, reqwest::Client::new()).unwrap();

    let started = Instant::now();
    let cancel = cancel_after(Duration::from_millis(100));
    let result = adapter.fetch_payment_history(event_id(), &cancel).await;

    assert!(matches!(result, Err(ReportError::Cancelled)));
    assert!(started.elapsed() < UPSTREAM_DELAY);
}

#[tokio::test]
async fn test_cancel_aborts_slow_survey_call() {
    let upstream = spawn_delayed_upstream(StatusCode::OK, SURVEY_AVERAGES, UPSTREAM_DELAY).await;
    let adapter = HttpSurveyAdapter::new(&upstream.base_url, reqwest::Client::new()).unwrap();

    let started = Instant::now();
    let cancel = cancel_after(Duration::from_millis(100));
    let result = adapter.fetch_survey_averages(event_id(), &cancel).await;

    assert!(matches!(result, Err(ReportError::Cancelled)));
    assert!(started.elapsed() < UPSTREAM_DELAY);
}

#[tokio::test]
async fn test_uncancelled_call_completes() {
    let upstream =
        spawn_delayed_upstream(StatusCode::OK, THREE_PAYMENTS, Duration::from_millis(50)).await;
    let adapter = HttpPaymentAdapter::new(&upstream.base_url, reqwest::Client::new()).unwrap();

    let records = adapter
        .fetch_payment_history(event_id(), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(records.len(), 3);
}
