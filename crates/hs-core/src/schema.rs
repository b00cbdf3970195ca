use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Multipliers keyed by the name of an entity in another table.
///
/// A name missing from the map has no effect on that entity's weight.
pub type AffinityMap = BTreeMap<String, f64>;

/// Multiplier used when an affinity map has no entry for an entity.
pub const DEFAULT_AFFINITY: f64 = 1.0;

/// A playable race.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    /// Unique name within the race table.
    pub name: String,
    /// Base sampling weight (> 0).
    pub weight: f64,
    /// Flavor traits shown with the character.
    pub traits: Vec<String>,
    /// Class name → multiplier applied when drawing a class for this race.
    pub class_affinities: AffinityMap,
    /// Skill name → multiplier applied when drawing skills for this race.
    #[serde(rename = "skills_affinities", alias = "skill_affinities")]
    pub skill_affinities: AffinityMap,
    /// Free text.
    pub description: String,
}

/// A character class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassInfo {
    /// Unique name within the class table.
    pub name: String,
    /// Base sampling weight (> 0).
    pub weight: f64,
    /// Label of the class's primary ability score.
    pub primary_stat: String,
    /// Skill name → multiplier applied when drawing skills for this class.
    pub skills: AffinityMap,
    /// Free text.
    pub description: String,
}

/// A character background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Background {
    /// Unique name within the background table.
    pub name: String,
    /// Base sampling weight (> 0).
    pub weight: f64,
    /// Class name → multiplier applied to this background once a class is drawn.
    pub class_affinities: AffinityMap,
    /// Skill name → multiplier. Checked for consistency but not used in
    /// sampling, since backgrounds are drawn after skills.
    pub skill_affinities: AffinityMap,
    /// Personality traits typical of the background.
    pub personality_traits: Vec<String>,
    /// Flaws typical of the background.
    pub flaws: Vec<String>,
    /// Motivations typical of the background.
    pub motivations: Vec<String>,
    /// Notable events in the character's past.
    pub notable_events: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn race_reads_legacy_skills_affinities_key() {
        let json = r#"{
            "name": "Elf",
            "weight": 3,
            "traits": ["Darkvision"],
            "class_affinities": {"Wizard": 2.0},
            "skills_affinities": {"Perception": 1.5},
            "description": "Graceful."
        }"#;
        let race: Race = serde_json::from_str(json).unwrap();
        assert_eq!(race.weight, 3.0);
        assert_eq!(race.skill_affinities.get("Perception"), Some(&1.5));
    }

    #[test]
    fn race_accepts_skill_affinities_alias() {
        let json = r#"{
            "name": "Elf",
            "weight": 1,
            "traits": [],
            "class_affinities": {},
            "skill_affinities": {"Arcana": 2},
            "description": ""
        }"#;
        let race: Race = serde_json::from_str(json).unwrap();
        assert_eq!(race.skill_affinities.get("Arcana"), Some(&2.0));
    }

    #[test]
    fn missing_field_is_rejected() {
        let json = r#"{"name": "Fighter", "weight": 1, "skills": {}, "description": ""}"#;
        let err = serde_json::from_str::<ClassInfo>(json).unwrap_err();
        assert!(err.to_string().contains("primary_stat"));
    }

    #[test]
    fn mistyped_weight_is_rejected() {
        let json = r#"{
            "name": "Sage",
            "weight": "heavy",
            "class_affinities": {},
            "skill_affinities": {},
            "personality_traits": [],
            "flaws": [],
            "motivations": [],
            "notable_events": []
        }"#;
        assert!(serde_json::from_str::<Background>(json).is_err());
    }
}
