use crate::domain::report::DailyPaymentReport;
use crate::domain::survey::SurveyAverageReport;
use serde::Serialize;
use std::io::{self, Write};

/// Writes report DTOs as pretty-printed JSON, one document per call.
pub struct ReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes the daily rollups; an empty report is written as `[]`.
    pub fn write_payments_report(&mut self, report: &[DailyPaymentReport]) -> io::Result<()> {
        self.write_document(report)
    }

    pub fn write_survey_averages(&mut self, report: &SurveyAverageReport) -> io::Result<()> {
        self.write_document(report)
    }

    fn write_document<T: Serialize + ?Sized>(&mut self, document: &T) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, document)?;
        writeln!(self.writer)?;
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
