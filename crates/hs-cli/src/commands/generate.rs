use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use hs_gen::{Character, CharacterBuilder, DrawStep, DrawTrace, GenConfig};
use miette::{IntoDiagnostic, WrapErr};

use crate::OutputFormat;

pub fn run(
    dir: &Path,
    seed: Option<u64>,
    describe: bool,
    format: OutputFormat,
    explain: bool,
) -> miette::Result<()> {
    let tables = super::load_tables(dir)?;

    let mut config = GenConfig::default().with_describe(describe);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let (character, trace) = CharacterBuilder::new(&tables)
        .generate_traced(&config)
        .into_diagnostic()
        .wrap_err("character generation failed")?;

    match format {
        OutputFormat::Json => {
            let json = if explain {
                serde_json::json!({ "character": character, "trace": trace })
            } else {
                serde_json::to_value(&character).into_diagnostic()?
            };
            let out = serde_json::to_string_pretty(&json).into_diagnostic()?;
            println!("{out}");
        }
        OutputFormat::Text => {
            print_character(&character);
            if explain {
                print_trace(&trace);
            }
        }
    }

    Ok(())
}

fn print_character(character: &Character) {
    let race = character.race();
    let class = character.class();
    let background = character.background();

    println!(
        "  {} {} {}",
        race.name.bold(),
        class.name.bold(),
        format!("({})", background.name).dimmed()
    );
    println!();
    println!("  {:<14} {}", "Primary stat".cyan(), class.primary_stat);
    println!("  {:<14} {}", "Skills".cyan(), character.skills().join(", "));
    println!("  {:<14} {}", "Traits".cyan(), race.traits.join(", "));
    print_first("Personality", &background.personality_traits);
    print_first("Flaw", &background.flaws);
    print_first("Motivation", &background.motivations);
    print_first("Notable event", &background.notable_events);

    if !character.description().is_empty() {
        println!();
        println!("  {}", character.description());
    }
    println!();
}

fn print_first(label: &str, values: &[String]) {
    if let Some(value) = values.first() {
        println!("  {:<14} {value}", label.cyan());
    }
}

fn print_trace(trace: &DrawTrace) {
    for step in [
        DrawStep::Race,
        DrawStep::Class,
        DrawStep::Skills,
        DrawStep::Background,
    ] {
        let weights = trace.step(step);
        let total: f64 = weights.iter().map(|(_, w)| w).sum();

        println!("  {}", format!("{step} weights").bold().underline());
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Name", "Weight", "Chance"]);
        for (name, weight) in weights {
            let chance = if total > 0.0 { weight / total * 100.0 } else { 0.0 };
            table.add_row(vec![
                name.clone(),
                format!("{weight:.2}"),
                format!("{chance:.1}%"),
            ]);
        }
        println!("{table}");
        println!();
    }
}
