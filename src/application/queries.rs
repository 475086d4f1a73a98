use crate::domain::event::EventId;

/// Asks for the daily payment rollup of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetPaymentsReport {
    event_id: EventId,
}

impl GetPaymentsReport {
    pub fn new(event_id: EventId) -> Self {
        Self { event_id }
    }

    pub fn event_id(&self) -> EventId {
        self.event_id
    }
}

/// Asks for the survey averages of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetSurveyAverages {
    event_id: EventId,
}

impl GetSurveyAverages {
    pub fn new(event_id: EventId) -> Self {
        Self { event_id }
    }

    pub fn event_id(&self) -> EventId {
        self.event_id
    }
}
