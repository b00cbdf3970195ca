pub mod check;
pub mod generate;
pub mod list;

use std::path::Path;

use hs_core::Tables;
use miette::{IntoDiagnostic, WrapErr};

/// Load and validate the tables in `dir`.
/// Every validation issue is printed to stderr before the error is returned.
fn load_tables(dir: &Path) -> miette::Result<Tables> {
    tracing::debug!(dir = %dir.display(), "loading tables");
    Tables::load_dir(dir)
        .inspect_err(|err| {
            for issue in err.issues() {
                eprintln!("  {issue}");
            }
        })
        .into_diagnostic()
        .wrap_err_with(|| format!("cannot use tables in {}", dir.display()))
}
