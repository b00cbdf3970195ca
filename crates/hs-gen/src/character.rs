//! The generated character.

use hs_core::{Background, ClassInfo, Race};
use serde::Serialize;

/// Number of distinct skills every character receives.
pub const SKILL_COUNT: usize = 3;

/// One generated character.
///
/// Built only by [`crate::CharacterBuilder`]; there are no setters, so a
/// character never changes after it is handed out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Character {
    race: Race,
    class: ClassInfo,
    skills: Vec<String>,
    background: Background,
    description: String,
}

impl Character {
    pub(crate) fn new(
        race: Race,
        class: ClassInfo,
        skills: Vec<String>,
        background: Background,
    ) -> Self {
        debug_assert_eq!(skills.len(), SKILL_COUNT);
        Self {
            race,
            class,
            skills,
            background,
            description: String::new(),
        }
    }

    pub(crate) fn with_description(mut self, description: String) -> Self {
        self.description = description;
        self
    }

    /// The drawn race.
    pub fn race(&self) -> &Race {
        &self.race
    }

    /// The drawn class.
    pub fn class(&self) -> &ClassInfo {
        &self.class
    }

    /// The drawn skills, in draw order.
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// The drawn background.
    pub fn background(&self) -> &Background {
        &self.background
    }

    /// Generated prose, or `""` when no describer was supplied.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({}) — {}",
            self.race.name,
            self.class.name,
            self.background.name,
            self.skills.join(", ")
        )
    }
}
