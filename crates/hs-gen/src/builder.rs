//! The four-draw character pipeline.
//!
//! Race, then class, then skills, then background. Each draw reads only the
//! tables and the results of earlier draws. There is no retry: the first
//! failing draw aborts the build.

use hs_core::{Background, ClassInfo, Race, Tables};
use rand::Rng;
use serde::Serialize;

use crate::affinity::{Weighted, resolve_toward, resolve_weights};
use crate::character::{Character, SKILL_COUNT};
use crate::config::GenConfig;
use crate::describe::{Describer, SummaryDescriber};
use crate::error::{GenError, GenResult};
use crate::sampler::{SampleError, sample_k_distinct, sample_one};

/// One stage of the draw sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DrawStep {
    /// Race by base weight.
    Race,
    /// Class, weighted by the race's class affinities.
    Class,
    /// Skills, weighted by race and class skill affinities.
    Skills,
    /// Background, weighted by each background's affinity for the class.
    Background,
}

impl std::fmt::Display for DrawStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Race => write!(f, "race"),
            Self::Class => write!(f, "class"),
            Self::Skills => write!(f, "skills"),
            Self::Background => write!(f, "background"),
        }
    }
}

/// The effective weights each draw was made with, in table order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DrawTrace {
    /// Race name and weight.
    pub race: Vec<(String, f64)>,
    /// Class name and effective weight.
    pub class: Vec<(String, f64)>,
    /// Skill name and effective weight.
    pub skills: Vec<(String, f64)>,
    /// Background name and effective weight.
    pub background: Vec<(String, f64)>,
}

impl DrawTrace {
    /// The weights recorded for one step.
    pub fn step(&self, step: DrawStep) -> &[(String, f64)] {
        match step {
            DrawStep::Race => &self.race,
            DrawStep::Class => &self.class,
            DrawStep::Skills => &self.skills,
            DrawStep::Background => &self.background,
        }
    }
}

/// Builds characters from a validated table store.
#[derive(Debug, Clone, Copy)]
pub struct CharacterBuilder<'t> {
    tables: &'t Tables,
}

impl<'t> CharacterBuilder<'t> {
    /// Create a builder over `tables`.
    pub fn new(tables: &'t Tables) -> Self {
        Self { tables }
    }

    /// Build one character with an empty description.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> GenResult<Character> {
        self.build_traced(rng, None).map(|(character, _)| character)
    }

    /// Build one character and describe it with `describer`.
    pub fn build_described<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        describer: &dyn Describer,
    ) -> GenResult<Character> {
        self.build_traced(rng, Some(describer))
            .map(|(character, _)| character)
    }

    /// Build one character as `config` asks: its seed (or OS entropy) and,
    /// if requested, a [`SummaryDescriber`] description.
    pub fn generate(&self, config: &GenConfig) -> GenResult<Character> {
        self.generate_traced(config).map(|(character, _)| character)
    }

    /// Like [`CharacterBuilder::generate`], also returning the draw weights.
    pub fn generate_traced(&self, config: &GenConfig) -> GenResult<(Character, DrawTrace)> {
        let describer: Option<&dyn Describer> = if config.describe {
            Some(&SummaryDescriber)
        } else {
            None
        };
        self.build_traced(&mut config.rng(), describer)
    }

    /// Build one character and also return the weights behind every draw.
    pub fn build_traced<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        describer: Option<&dyn Describer>,
    ) -> GenResult<(Character, DrawTrace)> {
        let mut trace = DrawTrace::default();

        let race = self.draw_race(rng, &mut trace)?;
        let class = self.draw_class(race, rng, &mut trace)?;
        let skills = self.draw_skills(race, class, rng, &mut trace)?;
        let background = self.draw_background(class, rng, &mut trace)?;

        let character = Character::new(race.clone(), class.clone(), skills, background.clone());
        let character = match describer {
            Some(describer) => {
                let description = describer.describe(&character);
                character.with_description(description)
            }
            None => character,
        };

        tracing::debug!(%character, "character built");
        Ok((character, trace))
    }

    fn draw_race<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        trace: &mut DrawTrace,
    ) -> GenResult<&'t Race> {
        let tables = self.tables;
        let races = tables.races();
        let weights = resolve_weights(races, &[]);
        tracing::trace!(?weights, "race weights");
        trace.race = labelled(races, &weights);

        let race = sample_one(races, &weights, rng).map_err(failed(DrawStep::Race))?;
        tracing::debug!(race = %race.name, "drew race");
        Ok(race)
    }

    fn draw_class<R: Rng + ?Sized>(
        &self,
        race: &Race,
        rng: &mut R,
        trace: &mut DrawTrace,
    ) -> GenResult<&'t ClassInfo> {
        let tables = self.tables;
        let classes = tables.classes();
        let weights = resolve_weights(classes, &[&race.class_affinities]);
        tracing::trace!(?weights, "class weights");
        trace.class = labelled(classes, &weights);

        let class = sample_one(classes, &weights, rng).map_err(failed(DrawStep::Class))?;
        tracing::debug!(class = %class.name, "drew class");
        Ok(class)
    }

    fn draw_skills<R: Rng + ?Sized>(
        &self,
        race: &Race,
        class: &ClassInfo,
        rng: &mut R,
        trace: &mut DrawTrace,
    ) -> GenResult<Vec<String>> {
        let tables = self.tables;
        let skills = tables.skills();
        let weights = resolve_weights(skills, &[&race.skill_affinities, &class.skills]);
        tracing::trace!(?weights, "skill weights");
        trace.skills = labelled(skills, &weights);

        let drawn = sample_k_distinct(skills, &weights, SKILL_COUNT, rng)
            .map_err(failed(DrawStep::Skills))?;
        let drawn: Vec<String> = drawn.into_iter().cloned().collect();
        tracing::debug!(skills = ?drawn, "drew skills");
        Ok(drawn)
    }

    fn draw_background<R: Rng + ?Sized>(
        &self,
        class: &ClassInfo,
        rng: &mut R,
        trace: &mut DrawTrace,
    ) -> GenResult<&'t Background> {
        let tables = self.tables;
        let backgrounds = tables.backgrounds();
        let weights = resolve_toward(backgrounds, &class.name, |b| &b.class_affinities);
        tracing::trace!(?weights, "background weights");
        trace.background = labelled(backgrounds, &weights);

        let background =
            sample_one(backgrounds, &weights, rng).map_err(failed(DrawStep::Background))?;
        tracing::debug!(background = %background.name, "drew background");
        Ok(background)
    }
}

fn failed(step: DrawStep) -> impl Fn(SampleError) -> GenError {
    move |source| GenError::Draw { step, source }
}

fn labelled<T: Weighted>(items: &[T], weights: &[f64]) -> Vec<(String, f64)> {
    items
        .iter()
        .zip(weights)
        .map(|(item, &w)| (item.key().to_string(), w))
        .collect()
}
