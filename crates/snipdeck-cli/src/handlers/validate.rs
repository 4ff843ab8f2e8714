//! Validate command handler.

use anyhow::Result;
use snipdeck_core::validate;

use crate::commands::SourceArgs;
use crate::error::CliError;
use crate::utils::source::read_source;

/// Execute the validate command.
///
/// Prints the verdict and any sensitive browser APIs the code touches.
/// Sensitive APIs are reported but never fail the command; a rejection
/// does, with the reason as the message.
pub fn execute(source: &SourceArgs) -> Result<()> {
    let code = read_source(source.file.as_deref())?;
    let report = validate(&code);

    for pattern in &report.flagged {
        eprintln!("warning: uses {pattern}");
    }

    match report.into_result() {
        Ok(()) => {
            println!("OK: snippet accepted");
            Ok(())
        }
        Err(reason) => Err(CliError::Rejected(reason.to_string()).into()),
    }
}
