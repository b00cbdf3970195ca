use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use hs_core::AffinityMap;

use crate::TableKind;

pub fn run(dir: &Path, kind: TableKind) -> miette::Result<()> {
    let tables = super::load_tables(dir)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let count = match kind {
        TableKind::Races => {
            table.set_header(vec![
                "Name",
                "Weight",
                "Traits",
                "Class affinities",
                "Skill affinities",
            ]);
            for race in tables.races() {
                table.add_row(vec![
                    race.name.clone(),
                    race.weight.to_string(),
                    race.traits.join(", "),
                    format_affinities(&race.class_affinities),
                    format_affinities(&race.skill_affinities),
                ]);
            }
            tables.races().len()
        }
        TableKind::Classes => {
            table.set_header(vec!["Name", "Weight", "Primary stat", "Skill affinities"]);
            for class in tables.classes() {
                table.add_row(vec![
                    class.name.clone(),
                    class.weight.to_string(),
                    class.primary_stat.clone(),
                    format_affinities(&class.skills),
                ]);
            }
            tables.classes().len()
        }
        TableKind::Skills => {
            table.set_header(vec!["Skill"]);
            for skill in tables.skills() {
                table.add_row(vec![skill.clone()]);
            }
            tables.skills().len()
        }
        TableKind::Backgrounds => {
            table.set_header(vec!["Name", "Weight", "Class affinities", "Motivations"]);
            for background in tables.backgrounds() {
                table.add_row(vec![
                    background.name.clone(),
                    background.weight.to_string(),
                    format_affinities(&background.class_affinities),
                    background.motivations.join("; "),
                ]);
            }
            tables.backgrounds().len()
        }
    };

    println!("{table}");
    println!();
    println!("  {count} entries");

    Ok(())
}

fn format_affinities(map: &AffinityMap) -> String {
    if map.is_empty() {
        return "—".to_string();
    }
    map.iter()
        .map(|(name, m)| format!("{name} ×{m}"))
        .collect::<Vec<_>>()
        .join(", ")
}
