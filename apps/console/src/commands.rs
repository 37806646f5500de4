//! # Subcommand Handlers
//!
//! One handler per `slm` subcommand. Handlers speak to the operator on
//! stdout and return `anyhow` errors for the process exit path.

use crate::args::DumpFormat;
use anyhow::{Context, Result};
use slm_kernel::catalog::Catalog;
use std::fs;
use std::path::Path;

/// Verifies a defines catalog file against the compiled tables.
///
/// # Result
/// Returns `Ok(())` after printing a confirmation with the entry count.
///
/// # Errors
/// Returns an error if the catalog cannot be read or any entry disagrees
/// with the compiled defines.
pub fn check(defines: &Path) -> Result<()> {
    tracing::debug!(path = %defines.display(), "Verifying defines catalog");

    let catalog = Catalog::load(defines)
        .with_context(|| format!("Catalog at '{}' failed verification", defines.display()))?;

    println!("✅ Catalog OK: {} entries match the compiled defines", catalog.entry_count());
    Ok(())
}

/// Writes the built-in defines catalog to stdout or a file.
///
/// # Result
/// Returns `Ok(())` after writing the rendered catalog.
///
/// # Errors
/// Returns an error if the catalog cannot be serialized or the output file
/// cannot be written.
pub fn dump(format: DumpFormat, output: Option<&Path>) -> Result<()> {
    let catalog = Catalog::builtin();

    let rendered = match format {
        DumpFormat::Toml => catalog.to_toml_string()?,
        DumpFormat::Json => serde_json::to_string_pretty(&catalog)?,
    };

    if let Some(path) = output {
        fs::write(path, &rendered)
            .with_context(|| format!("Failed to write catalog to '{}'", path.display()))?;
        println!("✅ Wrote {} defines entries to '{}'", catalog.entry_count(), path.display());
    } else {
        println!("{rendered}");
    }

    Ok(())
}
