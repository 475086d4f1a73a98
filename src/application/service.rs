use super::payments_report::PaymentsReportHandler;
use super::queries::{GetPaymentsReport, GetSurveyAverages};
use super::survey_averages::SurveyAveragesHandler;
use crate::config::ReportsConfig;
use crate::domain::event::EventId;
use crate::domain::ports::{PaymentHistorySourceBox, SurveyAverageSourceBox};
use crate::domain::report::{DailyPaymentReport, ReportTimeZone};
use crate::domain::survey::SurveyAverageReport;
use crate::error::Result;
use crate::infrastructure::http::payments::HttpPaymentAdapter;
use crate::infrastructure::http::surveys::HttpSurveyAdapter;
use tokio_util::sync::CancellationToken;

/// The reporting core as seen by its callers.
///
/// Holds no per-request state, so one instance can serve any number of concurrent
/// requests. Validating the event id is the caller's job.
pub struct ReportService {
    payments: PaymentsReportHandler,
    surveys: SurveyAveragesHandler,
}

impl ReportService {
    pub fn new(
        payments: PaymentHistorySourceBox,
        surveys: SurveyAverageSourceBox,
        time_zone: ReportTimeZone,
    ) -> Self {
        Self {
            payments: PaymentsReportHandler::new(payments, time_zone),
            surveys: SurveyAveragesHandler::new(surveys),
        }
    }

    /// Wires the HTTP adapters described by `config`, sharing one connection pool.
    pub fn from_config(config: &ReportsConfig) -> Result<Self> {
        let client = reqwest::Client::new();
        let payments = HttpPaymentAdapter::new(&config.payments_base_url, client.clone())?;
        let surveys = HttpSurveyAdapter::new(&config.surveys_base_url, client)?;

        Ok(Self::new(
            Box::new(payments),
            Box::new(surveys),
            config.report_time_zone,
        ))
    }

    pub async fn payments_report(
        &self,
        event_id: EventId,
        cancel: &CancellationToken,
    ) -> Result<Vec<DailyPaymentReport>> {
        self.payments
            .handle(GetPaymentsReport::new(event_id), cancel)
            .await
    }

    pub async fn survey_averages(
        &self,
        event_id: EventId,
        cancel: &CancellationToken,
    ) -> Result<Option<SurveyAverageReport>> {
        self.surveys
            .handle(GetSurveyAverages::new(event_id), cancel)
            .await
    }
}
