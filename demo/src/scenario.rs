use clap::{Parser, ValueEnum};
use polls::{Ack, PollId, PollManager, PollResults};
use time::format_description::well_known::Rfc3339;
use tracing::{debug, info};

use crate::error::DemoError;

const QUESTION: &str = "What is your favorite color?";
const OPTIONS: [&str; 4] = ["Red", "Blue", "Green", "Yellow"];
const UPDATED_QUESTION: &str = "What is your favorite primary color?";
const UPDATED_OPTIONS: [&str; 3] = ["Red", "Blue", "Yellow"];

/// How result lines are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `[(Red, 1), (Blue, 0)]`
    #[default]
    Text,
    /// Results serialized as camelCase JSON.
    Json,
}

/// Runs a single poll through its whole lifecycle and prints what a user sees.
#[derive(Debug, Parser)]
#[command(name = "poll-demo", version)]
pub struct DemoOptions {
    /// Format of the result lines.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

fn status(outcome: polls::Result<Ack>) -> String {
    match outcome {
        Ok(ack) => ack.to_string(),
        Err(e) => {
            debug!(code = ?e.code(), "Demo step refused");
            e.to_string()
        }
    }
}

fn render(results: &PollResults, format: OutputFormat) -> Result<String, DemoError> {
    match format {
        OutputFormat::Text => Ok(results.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(results)?),
    }
}

fn results_line(
    manager: &PollManager,
    label: &str,
    poll_id: PollId,
    format: OutputFormat,
) -> Result<String, DemoError> {
    match manager.view_poll_results(poll_id) {
        Ok(results) => Ok(format!("{label} for poll ID {poll_id} : {}", render(&results, format)?)),
        Err(e) => {
            debug!(code = ?e.code(), "No results to show");
            Ok(e.to_string())
        }
    }
}

/// Walks one poll through its whole life (create, vote, view, update, vote,
/// view, delete, view) and returns what a user would see, line by line.
pub fn run(manager: &mut PollManager, format: OutputFormat) -> Result<Vec<String>, DemoError> {
    let mut transcript = Vec::new();

    let poll_id = manager.create_poll(QUESTION, OPTIONS);
    let created_at = manager.get_poll(poll_id)?.created_at.format(&Rfc3339)?;
    info!(poll_id = %poll_id, %created_at, "Demo poll created");
    transcript.push(format!("Poll created with ID: {poll_id}"));

    for (user, option) in [("user1", "Red"), ("user2", "Blue"), ("user1", "Green")] {
        let outcome = manager.vote_in_poll(poll_id, user, option).map(|_| Ack::VoteCast);
        debug!(user, option, ok = outcome.is_ok(), "Demo vote");
        transcript.push(status(outcome));
    }
    transcript.push(results_line(manager, "Poll results", poll_id, format)?);

    transcript.push(status(
        manager.update_poll(poll_id, UPDATED_QUESTION, UPDATED_OPTIONS).map(|_| Ack::PollUpdated),
    ));
    transcript.push(status(
        manager.vote_in_poll(poll_id, "user3", "Yellow").map(|_| Ack::VoteCast),
    ));
    transcript.push(results_line(manager, "Updated poll results", poll_id, format)?);

    transcript.push(status(manager.delete_poll(poll_id).map(|_| Ack::PollDeleted)));
    transcript.push(results_line(manager, "Poll results", poll_id, format)?);

    info!(lines = transcript.len(), remaining_polls = manager.len(), "Demo finished");
    Ok(transcript)
}
