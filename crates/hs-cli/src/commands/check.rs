use std::path::Path;

use colored::Colorize;
use hs_core::{TableSet, validate_tables};
use miette::{IntoDiagnostic, WrapErr};

pub fn run(dir: &Path) -> miette::Result<()> {
    let set = TableSet::read_dir(dir)
        .into_diagnostic()
        .wrap_err_with(|| format!("cannot read tables in {}", dir.display()))?;

    let issues = validate_tables(&set);
    for issue in &issues {
        if issue.is_error() {
            eprintln!("  {}", issue.to_string().red());
        } else {
            eprintln!("  {}", issue.to_string().yellow());
        }
    }

    let errors = issues.iter().filter(|i| i.is_error()).count();
    let warnings = issues.len() - errors;
    if errors > 0 {
        return Err(miette::miette!(
            "{} error{}, {} warning{} in {}",
            errors,
            if errors == 1 { "" } else { "s" },
            warnings,
            if warnings == 1 { "" } else { "s" },
            dir.display()
        ));
    }

    println!("  All checks passed for {}.", dir.display());
    println!(
        "  {} races, {} classes, {} skills, {} backgrounds",
        set.races.len(),
        set.classes.len(),
        set.skills.len(),
        set.backgrounds.len()
    );
    if warnings > 0 {
        println!(
            "  {} warning{}",
            warnings,
            if warnings == 1 { "" } else { "s" }
        );
    }

    Ok(())
}
