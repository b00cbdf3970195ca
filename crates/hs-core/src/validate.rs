//! Consistency checks over a raw table set.
//!
//! Structural rules (positive weights and multipliers, unique non-empty
//! names, enough skills to draw from) and referential rules (every
//! affinity key names an entity in its target table) are collected into
//! a single report rather than stopping at the first problem. When every
//! entry passes on its own, the combined weights each draw will use are
//! checked too, since a product of valid numbers can still overflow or
//! underflow.

use std::collections::HashSet;

use crate::schema::{AffinityMap, DEFAULT_AFFINITY};
use crate::tables::{MIN_SKILLS, TableSet};

/// What kind of rule an issue breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// Shape, weight, or naming problem. Fatal.
    Schema,
    /// An affinity key that names nothing in its target table. Fatal.
    Reference,
    /// Suspicious but usable data.
    Warning,
}

/// A problem found during validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    /// The table entry the issue was found on, e.g. `race 'Elf'`.
    pub entity: String,
    /// A human-readable description of the issue.
    pub message: String,
    /// Which rule was broken.
    pub kind: IssueKind,
}

impl ValidationIssue {
    /// Whether this issue prevents the tables from being used.
    pub fn is_error(&self) -> bool {
        self.kind != IssueKind::Warning
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = if self.is_error() { "error" } else { "warning" };
        write!(f, "{level}: {}: {}", self.entity, self.message)
    }
}

/// Validate a raw table set.
///
/// Returns every issue found, in table order: table sizes first, then
/// skills, races, classes, backgrounds, and finally the combined
/// weights. An empty list means the tables are safe to sample from.
pub fn validate_tables(set: &TableSet) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    validate_sizes(set, &mut issues);

    let skills = validate_skills(&set.skills, &mut issues);
    let classes: HashSet<&str> = set.classes.iter().map(|c| c.name.as_str()).collect();

    let mut seen = HashSet::new();
    for (index, race) in set.races.iter().enumerate() {
        let label = entry_label("race", &race.name, index);
        check_name(&label, &race.name, &mut seen, &mut issues);
        check_weight(&label, race.weight, &mut issues);
        check_affinities(&label, &race.class_affinities, "class", &classes, &mut issues);
        check_affinities(&label, &race.skill_affinities, "skill", &skills, &mut issues);
        if race.traits.is_empty() {
            issues.push(warning(&label, "no traits listed"));
        }
    }

    let mut seen = HashSet::new();
    for (index, class) in set.classes.iter().enumerate() {
        let label = entry_label("class", &class.name, index);
        check_name(&label, &class.name, &mut seen, &mut issues);
        check_weight(&label, class.weight, &mut issues);
        check_affinities(&label, &class.skills, "skill", &skills, &mut issues);
    }

    let mut seen = HashSet::new();
    for (index, background) in set.backgrounds.iter().enumerate() {
        let label = entry_label("background", &background.name, index);
        check_name(&label, &background.name, &mut seen, &mut issues);
        check_weight(&label, background.weight, &mut issues);
        check_affinities(
            &label,
            &background.class_affinities,
            "class",
            &classes,
            &mut issues,
        );
        check_affinities(
            &label,
            &background.skill_affinities,
            "skill",
            &skills,
            &mut issues,
        );
        for (field, values) in [
            ("personality traits", &background.personality_traits),
            ("flaws", &background.flaws),
            ("motivations", &background.motivations),
            ("notable events", &background.notable_events),
        ] {
            if values.is_empty() {
                issues.push(warning(&label, &format!("no {field} listed")));
            }
        }
    }

    if !issues.iter().any(ValidationIssue::is_error) {
        validate_effective_weights(set, &mut issues);
    }

    issues
}

/// Check every weight a draw can see after affinities are applied.
///
/// Class weights are checked per race, skill weights per race and class
/// pair, and background weights per class.
fn validate_effective_weights(set: &TableSet, issues: &mut Vec<ValidationIssue>) {
    for race in &set.races {
        let label = format!("race '{}'", race.name);
        for class in &set.classes {
            let weight = class.weight * multiplier(&race.class_affinities, &class.name);
            check_effective(&label, "class", &class.name, weight, issues);
        }
        for class in &set.classes {
            let label = format!("race '{}' with class '{}'", race.name, class.name);
            for skill in &set.skills {
                let weight = multiplier(&race.skill_affinities, skill)
                    * multiplier(&class.skills, skill);
                check_effective(&label, "skill", skill, weight, issues);
            }
        }
    }

    for class in &set.classes {
        let label = format!("class '{}'", class.name);
        for background in &set.backgrounds {
            let weight =
                background.weight * multiplier(&background.class_affinities, &class.name);
            check_effective(&label, "background", &background.name, weight, issues);
        }
    }
}

fn multiplier(affinities: &AffinityMap, key: &str) -> f64 {
    affinities.get(key).copied().unwrap_or(DEFAULT_AFFINITY)
}

fn check_effective(
    label: &str,
    target: &str,
    key: &str,
    weight: f64,
    issues: &mut Vec<ValidationIssue>,
) {
    if !(weight.is_finite() && weight > 0.0) {
        issues.push(schema(
            label,
            &format!("effective {target} weight for '{key}' is out of range, got {weight}"),
        ));
    }
}

fn validate_sizes(set: &TableSet, issues: &mut Vec<ValidationIssue>) {
    for (table, len) in [
        ("race table", set.races.len()),
        ("class table", set.classes.len()),
        ("background table", set.backgrounds.len()),
    ] {
        if len == 0 {
            issues.push(schema(table, "table is empty"));
        }
    }

    if set.skills.len() < MIN_SKILLS {
        issues.push(schema(
            "skill table",
            &format!(
                "needs at least {MIN_SKILLS} skills, found {}",
                set.skills.len()
            ),
        ));
    }
}

/// Check skill names and return the set of known skills.
fn validate_skills<'a>(
    skills: &'a [String],
    issues: &mut Vec<ValidationIssue>,
) -> HashSet<&'a str> {
    let mut seen = HashSet::new();
    for (index, skill) in skills.iter().enumerate() {
        if skill.trim().is_empty() {
            issues.push(schema(
                "skill table",
                &format!("skill #{} has an empty name", index + 1),
            ));
        } else if !seen.insert(skill.as_str()) {
            issues.push(schema(
                "skill table",
                &format!("duplicate skill '{skill}'"),
            ));
        }
    }
    seen
}

fn entry_label(kind: &str, name: &str, index: usize) -> String {
    if name.trim().is_empty() {
        format!("{kind} #{}", index + 1)
    } else {
        format!("{kind} '{name}'")
    }
}

fn check_name<'a>(
    label: &str,
    name: &'a str,
    seen: &mut HashSet<&'a str>,
    issues: &mut Vec<ValidationIssue>,
) {
    if name.trim().is_empty() {
        issues.push(schema(label, "name is empty"));
    } else if !seen.insert(name) {
        issues.push(schema(label, "duplicate name"));
    }
}

fn check_weight(label: &str, weight: f64, issues: &mut Vec<ValidationIssue>) {
    if !(weight.is_finite() && weight > 0.0) {
        issues.push(schema(
            label,
            &format!("weight must be a positive number, got {weight}"),
        ));
    }
}

fn check_affinities(
    label: &str,
    affinities: &AffinityMap,
    target: &str,
    known: &HashSet<&str>,
    issues: &mut Vec<ValidationIssue>,
) {
    for (key, multiplier) in affinities {
        if !(multiplier.is_finite() && *multiplier > 0.0) {
            issues.push(schema(
                label,
                &format!(
                    "{target} affinity for '{key}' must be a positive number, got {multiplier}"
                ),
            ));
        }
        if !known.contains(key.as_str()) {
            issues.push(ValidationIssue {
                entity: label.to_string(),
                message: format!("{target} affinity references unknown {target} '{key}'"),
                kind: IssueKind::Reference,
            });
        }
    }
}

fn schema(entity: &str, message: &str) -> ValidationIssue {
    ValidationIssue {
        entity: entity.to_string(),
        message: message.to_string(),
        kind: IssueKind::Schema,
    }
}

fn warning(entity: &str, message: &str) -> ValidationIssue {
    ValidationIssue {
        entity: entity.to_string(),
        message: message.to_string(),
        kind: IssueKind::Warning,
    }
}
