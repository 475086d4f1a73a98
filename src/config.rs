use crate::domain::report::ReportTimeZone;

pub const DEFAULT_PAYMENTS_BASE_URL: &str = "http://localhost:7183/";
pub const DEFAULT_SURVEYS_BASE_URL: &str = "http://localhost:7186/";

/// Where the upstream services live and which calendar reports are grouped in.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportsConfig {
    pub payments_base_url: String,
    pub surveys_base_url: String,
    pub report_time_zone: ReportTimeZone,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            payments_base_url: DEFAULT_PAYMENTS_BASE_URL.to_string(),
            surveys_base_url: DEFAULT_SURVEYS_BASE_URL.to_string(),
            report_time_zone: ReportTimeZone::utc(),
        }
    }
}
