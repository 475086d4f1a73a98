use super::UpstreamClient;
use crate::domain::event::EventId;
use crate::domain::ports::SurveyAverageSource;
use crate::domain::survey::SurveyAverageReport;
use crate::error::{Result, Upstream};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Reads survey averages from `GET api/surveys/promedioRespuestasEvento/{eventId}`.
#[derive(Debug, Clone)]
pub struct HttpSurveyAdapter {
    upstream: UpstreamClient,
}

impl HttpSurveyAdapter {
    pub fn new(base_url: &str, client: reqwest::Client) -> Result<Self> {
        Ok(Self {
            upstream: UpstreamClient::new(Upstream::Surveys, base_url, client)?,
        })
    }
}

#[async_trait]
impl SurveyAverageSource for HttpSurveyAdapter {
    async fn fetch_survey_averages(
        &self,
        event_id: EventId,
        cancel: &CancellationToken,
    ) -> Result<Option<SurveyAverageReport>> {
        let path = format!("api/surveys/promedioRespuestasEvento/{event_id}");
        let body = match self.upstream.get(&path, cancel).await? {
            Some(body) if !body.trim().is_empty() => body,
            _ => {
                debug!(%event_id, "no survey averages");
                return Ok(None);
            }
        };

        self.upstream.decode(&body)
    }
}
