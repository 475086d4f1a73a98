use super::UpstreamClient;
use crate::domain::event::EventId;
use crate::domain::payment::PaymentRecord;
use crate::domain::ports::PaymentHistorySource;
use crate::error::{Result, Upstream};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Reads an event's payment history from `GET api/payments/historial/{eventId}`.
#[derive(Debug, Clone)]
pub struct HttpPaymentAdapter {
    upstream: UpstreamClient,
}

impl HttpPaymentAdapter {
    pub fn new(base_url: &str, client: reqwest::Client) -> Result<Self> {
        Ok(Self {
            upstream: UpstreamClient::new(Upstream::Payments, base_url, client)?,
        })
    }
}

#[async_trait]
impl PaymentHistorySource for HttpPaymentAdapter {
    async fn fetch_payment_history(
        &self,
        event_id: EventId,
        cancel: &CancellationToken,
    ) -> Result<Vec<PaymentRecord>> {
        let path = format!("api/payments/historial/{event_id}");
        let Some(body) = self.upstream.get(&path, cancel).await? else {
            debug!(%event_id, "no payment history");
            return Ok(Vec::new());
        };

        // A literal `null` body means no payments.
        let records: Option<Vec<PaymentRecord>> = self.upstream.decode(&body)?;
        Ok(records.unwrap_or_default())
    }
}
