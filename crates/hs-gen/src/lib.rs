//! Weighted conditional sampling and character building for Heldenschmiede.
//!
//! A character is made by four draws against validated [`hs_core::Tables`]:
//! race by base weight, class weighted by the race's class affinities, three
//! distinct skills weighted by race and class skill affinities, and a
//! background weighted by each background's affinity for the drawn class.
//! The random source is always passed in, so a seeded `StdRng` reproduces
//! the same character.

pub mod affinity;
pub mod builder;
pub mod character;
pub mod config;
pub mod describe;
pub mod error;
pub mod sampler;

pub use affinity::{DEFAULT_AFFINITY, Weighted, affinity_for, resolve_toward, resolve_weights};
pub use builder::{CharacterBuilder, DrawStep, DrawTrace};
pub use character::{Character, SKILL_COUNT};
pub use config::GenConfig;
pub use describe::{Describer, SummaryDescriber};
pub use error::{GenError, GenResult};
pub use sampler::{SampleError, sample_k_distinct, sample_one};
