use clap::{Parser, Subcommand};
use event_reports::application::service::ReportService;
use event_reports::config::{DEFAULT_PAYMENTS_BASE_URL, DEFAULT_SURVEYS_BASE_URL, ReportsConfig};
use event_reports::domain::event::EventId;
use event_reports::domain::report::ReportTimeZone;
use event_reports::interfaces::json::report_writer::ReportWriter;
use miette::{IntoDiagnostic, Result, miette};
use std::io;
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

/// Exit status when the event has no survey statistics.
const EXIT_NOT_FOUND: u8 = 2;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the payment service
    #[arg(long, env = "PAYMENTS_BASE_URL", default_value = DEFAULT_PAYMENTS_BASE_URL, global = true)]
    payments_url: String,

    /// Base URL of the survey service
    #[arg(long, env = "SURVEYS_BASE_URL", default_value = DEFAULT_SURVEYS_BASE_URL, global = true)]
    surveys_url: String,

    /// UTC offset whose calendar days payments are grouped by (`Z`, `+02:00`, `-0300`)
    #[arg(long, env = "REPORT_UTC_OFFSET", default_value = "Z", global = true)]
    utc_offset: ReportTimeZone,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print an event's payments grouped by day, most recent day first
    Payments { event_id: EventId },
    /// Print an event's survey averages per question
    Surveys { event_id: EventId },
}

impl Command {
    fn event_id(&self) -> EventId {
        match self {
            Command::Payments { event_id } | Command::Surveys { event_id } => *event_id,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let event_id = cli.command.event_id();
    if event_id.is_nil() {
        return Err(miette!("The event id is required"));
    }

    let config = ReportsConfig {
        payments_base_url: cli.payments_url,
        surveys_base_url: cli.surveys_url,
        report_time_zone: cli.utc_offset,
    };
    let service = ReportService::from_config(&config).into_diagnostic()?;

    // Ctrl-C abandons the outbound call instead of waiting it out.
    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    match cli.command {
        Command::Payments { event_id } => {
            let report = service
                .payments_report(event_id, &cancel)
                .await
                .into_diagnostic()?;
            let mut writer = ReportWriter::new(io::stdout().lock());
            writer.write_payments_report(&report).into_diagnostic()?;
        }
        Command::Surveys { event_id } => {
            let Some(report) = service
                .survey_averages(event_id, &cancel)
                .await
                .into_diagnostic()?
            else {
                eprintln!("No survey statistics found for event {event_id}");
                return Ok(ExitCode::from(EXIT_NOT_FOUND));
            };
            let mut writer = ReportWriter::new(io::stdout().lock());
            writer.write_survey_averages(&report).into_diagnostic()?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
