//! Normalize command handler.

use anyhow::Result;
use snipdeck_core::{DisplayFlags, ManifestOptions, Settings, build_manifest, normalize_detailed};

use crate::commands::SourceArgs;
use crate::utils::source::read_source;

/// Execute the normalize command.
///
/// Prints the normalized code, or with `manifest` the editor sandbox
/// manifest built from it. The input is not validated first.
pub fn execute(source: &SourceArgs, manifest: bool, settings: &Settings) -> Result<()> {
    let code = read_source(source.file.as_deref())?;
    let normalized = normalize_detailed(&code);

    if let Some(entry) = normalized.appended_export.as_ref().filter(|e| e.is_fallback()) {
        eprintln!("warning: no component name found, exporting '{}'", entry.name);
    }

    if manifest {
        let options =
            ManifestOptions::from_settings(settings).with_display(DisplayFlags::with_editor());
        println!("{}", build_manifest(&normalized.code, &options).to_json()?);
    } else {
        println!("{}", normalized.code);
    }
    Ok(())
}
