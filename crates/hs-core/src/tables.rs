use std::collections::{HashMap, HashSet};

use crate::error::{CoreError, CoreResult};
use crate::schema::{Background, ClassInfo, Race};
use crate::validate::{ValidationIssue, validate_tables};

/// Smallest skill table that still allows a full draw of distinct skills.
pub const MIN_SKILLS: usize = 3;

/// The four tables as parsed, before any consistency checks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableSet {
    /// Race table.
    pub races: Vec<Race>,
    /// Class table.
    pub classes: Vec<ClassInfo>,
    /// Skill names, in source order.
    pub skills: Vec<String>,
    /// Background table.
    pub backgrounds: Vec<Background>,
}

/// A validated, read-only set of tables.
///
/// The only way to obtain one is through [`Tables::new`] (or the loaders
/// built on it), so every affinity key is known to resolve and every
/// effective weight a draw can see is finite and positive. There are no
/// mutating methods; share it by
/// reference or behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Tables {
    set: TableSet,
    warnings: Vec<ValidationIssue>,
    race_index: HashMap<String, usize>,
    class_index: HashMap<String, usize>,
    background_index: HashMap<String, usize>,
    skill_names: HashSet<String>,
}

impl Tables {
    /// Validate a table set and freeze it.
    ///
    /// Fails with [`CoreError::SchemaViolation`] or
    /// [`CoreError::ReferentialIntegrity`] carrying the full issue list.
    /// Warnings are kept and available through [`Tables::warnings`].
    pub fn new(set: TableSet) -> CoreResult<Self> {
        let issues = validate_tables(&set);
        if let Some(err) = CoreError::from_issues(issues.clone()) {
            tracing::debug!(issues = issues.len(), "table validation failed");
            return Err(err);
        }

        for warning in &issues {
            tracing::warn!("{warning}");
        }
        tracing::debug!(
            races = set.races.len(),
            classes = set.classes.len(),
            skills = set.skills.len(),
            backgrounds = set.backgrounds.len(),
            "tables validated"
        );

        Ok(Self {
            race_index: index_by_name(set.races.iter().map(|r| r.name.as_str())),
            class_index: index_by_name(set.classes.iter().map(|c| c.name.as_str())),
            background_index: index_by_name(set.backgrounds.iter().map(|b| b.name.as_str())),
            skill_names: set.skills.iter().cloned().collect(),
            warnings: issues,
            set,
        })
    }

    /// All races, in source order.
    pub fn races(&self) -> &[Race] {
        &self.set.races
    }

    /// All classes, in source order.
    pub fn classes(&self) -> &[ClassInfo] {
        &self.set.classes
    }

    /// All skill names, in source order.
    pub fn skills(&self) -> &[String] {
        &self.set.skills
    }

    /// All backgrounds, in source order.
    pub fn backgrounds(&self) -> &[Background] {
        &self.set.backgrounds
    }

    /// Look up a race by exact name.
    pub fn race(&self, name: &str) -> Option<&Race> {
        self.race_index.get(name).map(|&i| &self.set.races[i])
    }

    /// Look up a class by exact name.
    pub fn class(&self, name: &str) -> Option<&ClassInfo> {
        self.class_index.get(name).map(|&i| &self.set.classes[i])
    }

    /// Look up a background by exact name.
    pub fn background(&self, name: &str) -> Option<&Background> {
        self.background_index
            .get(name)
            .map(|&i| &self.set.backgrounds[i])
    }

    /// Whether the skill table contains `name`.
    pub fn has_skill(&self, name: &str) -> bool {
        self.skill_names.contains(name)
    }

    /// Non-fatal issues found during validation.
    pub fn warnings(&self) -> &[ValidationIssue] {
        &self.warnings
    }
}

fn index_by_name<'a>(names: impl Iterator<Item = &'a str>) -> HashMap<String, usize> {
    names
        .enumerate()
        .map(|(i, name)| (name.to_string(), i))
        .collect()
}
