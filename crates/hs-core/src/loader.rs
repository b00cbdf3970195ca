//! Reading tables from JSON.
//!
//! Each table lives in its own file, wrapped in an object keyed by the
//! table name:
//!
//! ```text
//! races.json        {"races": [ { "name": "Elf", "weight": 3, ... } ]}
//! classes.json      {"classes": [ ... ]}
//! skills.json       {"skills": ["Arcana", "Stealth", ...]}
//! backgrounds.json  {"backgrounds": [ ... ]}
//! ```

use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{CoreError, CoreResult};
use crate::schema::{Background, ClassInfo, Race};
use crate::tables::{TableSet, Tables};

/// File name of the race table inside a data directory.
pub const RACES_FILE: &str = "races.json";
/// File name of the class table inside a data directory.
pub const CLASSES_FILE: &str = "classes.json";
/// File name of the skill table inside a data directory.
pub const SKILLS_FILE: &str = "skills.json";
/// File name of the background table inside a data directory.
pub const BACKGROUNDS_FILE: &str = "backgrounds.json";

#[derive(Deserialize)]
struct RaceFile {
    races: Vec<Race>,
}

#[derive(Deserialize)]
struct ClassFile {
    classes: Vec<ClassInfo>,
}

#[derive(Deserialize)]
struct SkillFile {
    skills: Vec<String>,
}

#[derive(Deserialize)]
struct BackgroundFile {
    backgrounds: Vec<Background>,
}

fn parse<T: DeserializeOwned>(table: &'static str, json: &str) -> CoreResult<T> {
    serde_json::from_str(json).map_err(|source| CoreError::Malformed { table, source })
}

fn read(dir: &Path, file: &str) -> CoreResult<String> {
    let path = dir.join(file);
    tracing::debug!(path = %path.display(), "reading table");
    std::fs::read_to_string(&path).map_err(|source| CoreError::Io { path, source })
}

impl TableSet {
    /// Parse the four table sources without validating them.
    pub fn from_json_strs(
        races: &str,
        classes: &str,
        skills: &str,
        backgrounds: &str,
    ) -> CoreResult<Self> {
        Ok(Self {
            races: parse::<RaceFile>("races", races)?.races,
            classes: parse::<ClassFile>("classes", classes)?.classes,
            skills: parse::<SkillFile>("skills", skills)?.skills,
            backgrounds: parse::<BackgroundFile>("backgrounds", backgrounds)?.backgrounds,
        })
    }

    /// Read and parse the four table files from `dir` without validating them.
    pub fn read_dir(dir: impl AsRef<Path>) -> CoreResult<Self> {
        let dir = dir.as_ref();
        Self::from_json_strs(
            &read(dir, RACES_FILE)?,
            &read(dir, CLASSES_FILE)?,
            &read(dir, SKILLS_FILE)?,
            &read(dir, BACKGROUNDS_FILE)?,
        )
    }
}

impl Tables {
    /// Parse and validate the four table sources.
    pub fn from_json_strs(
        races: &str,
        classes: &str,
        skills: &str,
        backgrounds: &str,
    ) -> CoreResult<Self> {
        Self::new(TableSet::from_json_strs(races, classes, skills, backgrounds)?)
    }

    /// Read, parse, and validate the four table files from `dir`.
    pub fn load_dir(dir: impl AsRef<Path>) -> CoreResult<Self> {
        Self::new(TableSet::read_dir(dir)?)
    }
}
