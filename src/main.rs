use anyhow::{Context, Result};
use std::io;
use tracing_subscriber::EnvFilter;

mod checks;
mod decision;
mod input;

use decision::Decision;
use input::HookInput;

/// Environment variable holding the stderr log filter (e.g. "debug")
const LOG_ENV: &str = "PREFER_UV_HOOK_LOG";

/// Log to stderr only; stdout is reserved for the decision.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}

fn main() -> Result<()> {
    init_logging();

    let input = input::read_input(io::stdin().lock())?;
    let decision = evaluate(&input);

    decision
        .write_to(io::stdout().lock())
        .context("failed to write decision to stdout")?;

    Ok(())
}

fn evaluate(input: &HookInput) -> Decision {
    tracing::debug!(
        event = input.hook_event_name.as_deref().unwrap_or("None"),
        tool = input.tool_name.as_deref().unwrap_or("None"),
        session = input.session_id.as_deref().unwrap_or("None"),
        command_len = input.command().len(),
        "hook input received"
    );

    let issues = checks::validate(input.command());
    let decision = Decision::from_issues(&issues);

    if let Decision::Block { reason } = &decision {
        tracing::info!(%reason, "blocking command");
    }

    decision
}
