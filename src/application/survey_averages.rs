use super::queries::GetSurveyAverages;
use crate::domain::ports::SurveyAverageSourceBox;
use crate::domain::survey::SurveyAverageReport;
use crate::error::Result;
use tokio_util::sync::CancellationToken;

/// Relays an event's survey averages from the survey source untouched.
pub struct SurveyAveragesHandler {
    surveys: SurveyAverageSourceBox,
}

impl SurveyAveragesHandler {
    pub fn new(surveys: SurveyAverageSourceBox) -> Self {
        Self { surveys }
    }

    #[tracing::instrument(skip(self, cancel), fields(event_id = %query.event_id()))]
    pub async fn handle(
        &self,
        query: GetSurveyAverages,
        cancel: &CancellationToken,
    ) -> Result<Option<SurveyAverageReport>> {
        self.surveys
            .fetch_survey_averages(query.event_id(), cancel)
            .await
    }
}
