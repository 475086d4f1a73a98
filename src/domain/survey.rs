use super::event::EventId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Average score of one survey question, precomputed by the survey service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct QuestionAverage {
    #[serde(rename(deserialize = "questionid"))]
    pub question_id: Uuid,
    #[serde(rename(deserialize = "questiontext"))]
    pub question_text: String,
    #[serde(
        rename(deserialize = "computedaverage"),
        alias = "promediocalculado",
        alias = "average"
    )]
    pub computed_average: f64,
    #[serde(rename(deserialize = "responsecount"), alias = "cantidadrespuestas")]
    pub response_count: u32,
}

/// Per-question averages for the survey attached to an event.
///
/// Relayed from the survey service as-is. Deserialization expects lower-cased keys (see
/// [`crate::infrastructure::http::json`]); serialization uses camelCase.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct SurveyAverageReport {
    #[serde(rename(deserialize = "eventid"), alias = "eventoid")]
    pub event_id: EventId,
    #[serde(rename(deserialize = "surveyid"))]
    pub survey_id: Uuid,
    #[serde(rename(deserialize = "surveytitle"))]
    pub survey_title: String,
    #[serde(
        rename(deserialize = "questions"),
        alias = "questionsstats",
        alias = "questionaverages"
    )]
    pub questions: Vec<QuestionAverage>,
}
