use crate::domain::event::EventId;
use crate::domain::payment::PaymentRecord;
use crate::domain::ports::{PaymentHistorySource, SurveyAverageSource};
use crate::domain::survey::SurveyAverageReport;
use crate::error::{ReportError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

/// In-process payment history, keyed by event.
///
/// Unknown events answer with an empty history, like a 404 from the payment service.
#[derive(Default, Clone)]
pub struct InMemoryPaymentSource {
    payments: Arc<RwLock<HashMap<EventId, Vec<PaymentRecord>>>>,
}

impl InMemoryPaymentSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `records` to the history of `event_id`.
    pub async fn insert(&self, event_id: EventId, records: Vec<PaymentRecord>) {
        let mut payments = self.payments.write().await;
        payments.entry(event_id).or_default().extend(records);
    }
}

#[async_trait]
impl PaymentHistorySource for InMemoryPaymentSource {
    async fn fetch_payment_history(
        &self,
        event_id: EventId,
        cancel: &CancellationToken,
    ) -> Result<Vec<PaymentRecord>> {
        if cancel.is_cancelled() {
            return Err(ReportError::Cancelled);
        }
        let payments = self.payments.read().await;
        Ok(payments.get(&event_id).cloned().unwrap_or_default())
    }
}

/// In-process survey averages, keyed by event.
#[derive(Default, Clone)]
pub struct InMemorySurveySource {
    surveys: Arc<RwLock<HashMap<EventId, SurveyAverageReport>>>,
}

impl InMemorySurveySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, report: SurveyAverageReport) {
        let mut surveys = self.surveys.write().await;
        surveys.insert(report.event_id, report);
    }
}

#[async_trait]
impl SurveyAverageSource for InMemorySurveySource {
    async fn fetch_survey_averages(
        &self,
        event_id: EventId,
        cancel: &CancellationToken,
    ) -> Result<Option<SurveyAverageReport>> {
        if cancel.is_cancelled() {
            return Err(ReportError::Cancelled);
        }
        let surveys = self.surveys.read().await;
        Ok(surveys.get(&event_id).cloned())
    }
}
