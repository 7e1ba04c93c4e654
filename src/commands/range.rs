use crate::changes::{Comparison, ForcePushStrategy, plan_push_comparison, read_push_event};
use crate::cli::{Cli, RangeArgs};
use crate::{EXIT_INPUT_ERROR, EXIT_SUCCESS, Result};

use super::context::{color_choice_to_mode, read_input, report_failure};

#[must_use]
pub fn run_range(args: &RangeArgs, cli: &Cli) -> i32 {
    let result = read_input(&args.event).and_then(|payload| {
        plan_range(
            &payload,
            args.default_branch.as_deref(),
            args.force_push_strategy,
        )
    });

    match result {
        Ok(comparison) => {
            println!("{} {}", comparison.base, comparison.head);
            EXIT_SUCCESS
        }
        Err(e) => report_failure(&e, color_choice_to_mode(cli.color), EXIT_INPUT_ERROR),
    }
}

/// Work out which revisions to diff for a push event payload.
///
/// # Errors
/// Returns an error if the payload is not a push event, or if it is a
/// force push and `strategy` is [`ForcePushStrategy::Fail`].
pub fn plan_range(
    payload: &str,
    default_branch: Option<&str>,
    strategy: ForcePushStrategy,
) -> Result<Comparison> {
    let event = read_push_event(payload)?;
    let comparison = plan_push_comparison(&event, default_branch, strategy)?;
    tracing::info!(
        strategy = %comparison.strategy,
        "Comparing {}...{}",
        comparison.base,
        comparison.head
    );
    Ok(comparison)
}

#[cfg(test)]
#[path = "range_tests.rs"]
mod tests;
