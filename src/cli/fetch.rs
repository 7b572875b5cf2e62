//! Fetch command handler.
//!
//! Implements the `fetch` subcommand, which downloads the current summary
//! snapshot without diffing it.

use crate::config::{FetchConfig, Validatable};
use crate::error::{FetchErrorKind, OperatorDiffError};
use crate::pipeline::{fetch_snapshot_with_context, write_output, OutputTarget};
use anyhow::Result;

/// Run the fetch command.
#[allow(clippy::needless_pass_by_value)]
pub fn run_fetch(config: FetchConfig) -> Result<()> {
    let errors = config.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        return Err(OperatorDiffError::validation(messages.join("; ")).into());
    }

    let api_key = config.api_key.as_deref().ok_or_else(|| {
        OperatorDiffError::fetch(
            "resolving credentials",
            FetchErrorKind::MissingApiKey(config.source.api_key_env.clone()),
        )
    })?;

    let fetched = fetch_snapshot_with_context(&config.source, api_key, config.quiet)?;
    let target = OutputTarget::from_option(config.output_file.clone());
    write_output(fetched.raw_content(), &target, config.quiet)
}
