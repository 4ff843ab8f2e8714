//! Reading component source from a file or stdin.

use std::io::{self, Read};
use std::path::Path;

use crate::error::CliError;

/// Read component source from `path`, or from stdin when `path` is `None`
/// or `-`.
pub fn read_source(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .map_err(|e| CliError::Io(format!("{}: {e}", p.display()))),
        _ => {
            let mut code = String::new();
            io::stdin().read_to_string(&mut code)?;
            Ok(code)
        }
    }
}
