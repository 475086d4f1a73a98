use super::queries::GetPaymentsReport;
use crate::domain::ports::PaymentHistorySourceBox;
use crate::domain::report::{DailyPaymentReport, ReportTimeZone, daily_payment_reports};
use crate::error::Result;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Builds the per-day payment report for an event.
///
/// Fetches the raw history once and groups it by calendar day in the configured
/// [`ReportTimeZone`]. Source errors are returned unchanged.
pub struct PaymentsReportHandler {
    payments: PaymentHistorySourceBox,
    time_zone: ReportTimeZone,
}

impl PaymentsReportHandler {
    pub fn new(payments: PaymentHistorySourceBox, time_zone: ReportTimeZone) -> Self {
        Self {
            payments,
            time_zone,
        }
    }

    #[tracing::instrument(skip(self, cancel), fields(event_id = %query.event_id()))]
    pub async fn handle(
        &self,
        query: GetPaymentsReport,
        cancel: &CancellationToken,
    ) -> Result<Vec<DailyPaymentReport>> {
        let records = self
            .payments
            .fetch_payment_history(query.event_id(), cancel)
            .await?;

        if records.is_empty() {
            return Ok(Vec::new());
        }

        let report = daily_payment_reports(&records, self.time_zone);
        debug!(
            records = records.len(),
            days = report.len(),
            "payments grouped by day"
        );
        Ok(report)
    }
}
