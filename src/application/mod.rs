//! Application layer: the query objects, their handlers and the `ReportService` that
//! exposes both report operations to callers.
//!
//! Every operation takes a `CancellationToken` from the caller and hands it down to the
//! outbound call, so an abandoned request stops waiting on the upstream.

pub mod payments_report;
pub mod queries;
pub mod service;
pub mod survey_averages;
