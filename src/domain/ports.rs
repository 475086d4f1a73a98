use super::event::EventId;
use super::payment::PaymentRecord;
use super::survey::SurveyAverageReport;
use crate::error::Result;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Source of an event's raw payment history.
///
/// "Not found" is not an error: implementations return an empty list for it.
#[async_trait]
pub trait PaymentHistorySource: Send + Sync {
    async fn fetch_payment_history(
        &self,
        event_id: EventId,
        cancel: &CancellationToken,
    ) -> Result<Vec<PaymentRecord>>;
}

/// Source of an event's precomputed survey averages.
///
/// `Ok(None)` means the event has no survey data.
#[async_trait]
pub trait SurveyAverageSource: Send + Sync {
    async fn fetch_survey_averages(
        &self,
        event_id: EventId,
        cancel: &CancellationToken,
    ) -> Result<Option<SurveyAverageReport>>;
}

pub type PaymentHistorySourceBox = Box<dyn PaymentHistorySource>;
pub type SurveyAverageSourceBox = Box<dyn SurveyAverageSource>;
