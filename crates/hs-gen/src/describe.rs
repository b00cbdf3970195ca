//! Character descriptions.
//!
//! Description text is produced after a character is assembled, by any
//! [`Describer`]. The builder never calls one unless asked to.

use crate::character::Character;

/// Turns a finished character into prose.
pub trait Describer {
    /// Describe `character`.
    fn describe(&self, character: &Character) -> String;
}

impl<F> Describer for F
where
    F: Fn(&Character) -> String,
{
    fn describe(&self, character: &Character) -> String {
        self(character)
    }
}

/// A deterministic describer built from the character's own table data.
///
/// Uses the first personality trait, flaw, and motivation of the
/// background, so the same character always gets the same text.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryDescriber;

impl Describer for SummaryDescriber {
    fn describe(&self, character: &Character) -> String {
        let race = &character.race().name;
        let class = character.class();
        let background = character.background();

        let mut text = format!(
            "{} {race} {} who leads with {}, trained in {}.",
            article(race),
            class.name,
            class.primary_stat,
            join_names(character.skills())
        );

        let once = article(&background.name).to_lowercase();
        text.push_str(&format!(" Once {once} {}", background.name));
        let traits = background.personality_traits.first().map(|t| lower_first(t));
        let flaw = background.flaws.first().map(|f| lower_first(f));
        match (traits, flaw) {
            (Some(t), Some(f)) => text.push_str(&format!(": {t}, but {f}.")),
            (Some(one), None) | (None, Some(one)) => text.push_str(&format!(": {one}.")),
            (None, None) => text.push('.'),
        }

        if let Some(motivation) = background.motivations.first() {
            text.push_str(&format!(" Driven to {}.", lower_first(motivation)));
        }

        text
    }
}

fn article(word: &str) -> &'static str {
    match word.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "An",
        _ => "A",
    }
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `a`, `a and b`, `a, b and c`.
fn join_names(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}
