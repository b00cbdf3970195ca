//! Weighted random selection.
//!
//! [`sample_one`] picks a single element with probability proportional to
//! its weight. [`sample_k_distinct`] picks `k` distinct elements by
//! sequential renormalization: each step draws from whatever is left, in
//! proportion to the remaining weights, and removes the winner. This is not
//! the same distribution as "inclusion probability proportional to weight".

use rand::Rng;

/// Sampler precondition failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SampleError {
    /// The population has no elements.
    #[error("cannot sample from an empty population")]
    EmptyPopulation,

    /// Population and weight slices differ in length.
    #[error("population has {population} elements but {weights} weights were given")]
    LengthMismatch {
        /// Number of elements.
        population: usize,
        /// Number of weights.
        weights: usize,
    },

    /// A weight is zero, negative, or not finite.
    #[error("weight at index {index} must be positive, got {weight}")]
    InvalidWeight {
        /// Position of the offending weight.
        index: usize,
        /// The offending weight.
        weight: f64,
    },

    /// More distinct elements were requested than exist.
    #[error("cannot draw {requested} distinct elements from a population of {available}")]
    InvalidSampleSize {
        /// How many elements were asked for.
        requested: usize,
        /// How many elements exist.
        available: usize,
    },
}

fn check_inputs<T>(population: &[T], weights: &[f64]) -> Result<(), SampleError> {
    if population.len() != weights.len() {
        return Err(SampleError::LengthMismatch {
            population: population.len(),
            weights: weights.len(),
        });
    }
    if population.is_empty() {
        return Err(SampleError::EmptyPopulation);
    }
    if let Some((index, &weight)) = weights
        .iter()
        .enumerate()
        .find(|(_, w)| !(w.is_finite() && **w > 0.0))
    {
        return Err(SampleError::InvalidWeight { index, weight });
    }
    Ok(())
}

/// Walk `weights` with a uniform roll over their sum and return the
/// position the roll lands on. `weights` must be non-empty and positive.
///
/// Weights are divided by the largest one first, so the sum stays finite
/// even when every weight is close to `f64::MAX`.
fn roll_position<R, I>(rng: &mut R, weights: I) -> usize
where
    R: Rng + ?Sized,
    I: Iterator<Item = f64> + Clone,
{
    let max = weights.clone().fold(0.0, f64::max);
    let total: f64 = weights.clone().map(|w| w / max).sum();
    let mut roll = rng.random::<f64>() * total;
    let mut last = 0;
    for (position, weight) in weights.map(|w| w / max).enumerate() {
        if roll < weight {
            return position;
        }
        roll -= weight;
        last = position;
    }
    // Rounding can leave a sliver past the final bucket.
    last
}

/// Draw one element with probability proportional to its weight.
///
/// `population` and `weights` must have the same non-zero length and every
/// weight must be finite and positive.
pub fn sample_one<'a, T, R>(
    population: &'a [T],
    weights: &[f64],
    rng: &mut R,
) -> Result<&'a T, SampleError>
where
    R: Rng + ?Sized,
{
    check_inputs(population, weights)?;
    let position = roll_position(rng, weights.iter().copied());
    Ok(&population[position])
}

/// Draw `k` distinct elements without replacement.
///
/// Each step picks from the remaining elements in proportion to their
/// weights, then swap-removes the winner from an index array, so the
/// population itself is never reordered. `k == 0` yields an empty vector.
pub fn sample_k_distinct<'a, T, R>(
    population: &'a [T],
    weights: &[f64],
    k: usize,
    rng: &mut R,
) -> Result<Vec<&'a T>, SampleError>
where
    R: Rng + ?Sized,
{
    check_inputs(population, weights)?;
    if k > population.len() {
        return Err(SampleError::InvalidSampleSize {
            requested: k,
            available: population.len(),
        });
    }

    let mut remaining: Vec<usize> = (0..population.len()).collect();
    let mut chosen = Vec::with_capacity(k);
    for _ in 0..k {
        // Rolled over the remaining weights only, so each step renormalizes.
        let position = roll_position(rng, remaining.iter().map(|&i| weights[i]));
        let index = remaining.swap_remove(position);
        chosen.push(&population[index]);
    }
    Ok(chosen)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn single_element_is_always_chosen() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(sample_one(&["only"], &[0.25], &mut rng), Ok(&"only"));
        }
    }

    #[test]
    fn empty_population_is_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        let empty: [u8; 0] = [];
        assert_eq!(
            sample_one(&empty, &[], &mut rng),
            Err(SampleError::EmptyPopulation)
        );
        assert_eq!(
            sample_k_distinct(&empty, &[], 0, &mut rng),
            Err(SampleError::EmptyPopulation)
        );
    }

    #[test]
    fn non_positive_weights_are_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            sample_one(&['a', 'b'], &[1.0, 0.0], &mut rng),
            Err(SampleError::InvalidWeight {
                index: 1,
                weight: 0.0
            })
        );
        assert_eq!(
            sample_k_distinct(&['a', 'b'], &[-2.0, 1.0], 1, &mut rng),
            Err(SampleError::InvalidWeight {
                index: 0,
                weight: -2.0
            })
        );
        assert!(matches!(
            sample_one(&['a'], &[f64::INFINITY], &mut rng),
            Err(SampleError::InvalidWeight { index: 0, .. })
        ));
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            sample_one(&['a', 'b'], &[1.0], &mut rng),
            Err(SampleError::LengthMismatch {
                population: 2,
                weights: 1
            })
        );
    }

    #[test]
    fn oversized_draw_is_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            sample_k_distinct(&[1, 2, 3], &[1.0, 1.0, 1.0], 4, &mut rng),
            Err(SampleError::InvalidSampleSize {
                requested: 4,
                available: 3
            })
        );
    }

    #[test]
    fn zero_draw_is_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        let drawn = sample_k_distinct(&[1, 2, 3], &[1.0, 1.0, 1.0], 0, &mut rng).unwrap();
        assert!(drawn.is_empty());
    }

    #[test]
    fn full_draw_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(11);
        let population = ["a", "b", "c", "d", "e"];
        let drawn = sample_k_distinct(&population, &[5.0, 1.0, 1.0, 0.5, 2.0], 5, &mut rng).unwrap();
        let mut names: Vec<_> = drawn.into_iter().copied().collect();
        names.sort_unstable();
        assert_eq!(names, population);
    }

    #[test]
    fn dominant_weight_converges() {
        let mut rng = StdRng::seed_from_u64(42);
        let population = ["rare", "common"];
        let weights = [1.0, 99.0];
        let trials = 100_000;
        let hits = (0..trials)
            .filter(|_| *sample_one(&population, &weights, &mut rng).unwrap() == "common")
            .count();
        let freq = hits as f64 / trials as f64;
        assert!((freq - 0.99).abs() < 0.005, "frequency {freq}");
    }

    #[test]
    fn equal_weights_are_uniform() {
        let mut rng = StdRng::seed_from_u64(3);
        let population = [0usize, 1, 2];
        let weights = [1.0, 1.0, 1.0];
        let trials = 60_000;
        let mut counts = [0usize; 3];
        for _ in 0..trials {
            counts[*sample_one(&population, &weights, &mut rng).unwrap()] += 1;
        }
        for count in counts {
            let freq = count as f64 / trials as f64;
            assert!((freq - 1.0 / 3.0).abs() < 0.01, "frequency {freq}");
        }
    }

    #[test]
    fn huge_weights_stay_proportional() {
        let mut rng = StdRng::seed_from_u64(17);
        let population = ["first", "second"];
        let weights = [f64::MAX, f64::MAX];
        let trials = 10_000;
        let firsts = (0..trials)
            .filter(|_| *sample_one(&population, &weights, &mut rng).unwrap() == "first")
            .count();
        let freq = firsts as f64 / trials as f64;
        assert!((freq - 0.5).abs() < 0.03, "first frequency {freq}");
    }

    #[test]
    fn huge_weights_renormalize_in_k_distinct() {
        let mut rng = StdRng::seed_from_u64(23);
        let population = ["a", "b", "c"];
        let weights = [f64::MAX, f64::MAX / 2.0, f64::MAX / 2.0];
        let trials = 10_000;
        let first_a = (0..trials)
            .filter(|_| *sample_k_distinct(&population, &weights, 2, &mut rng).unwrap()[0] == "a")
            .count();
        let freq = first_a as f64 / trials as f64;
        assert!((freq - 0.5).abs() < 0.03, "first slot frequency {freq}");
    }

    #[test]
    fn second_pick_is_renormalized_over_remaining() {
        // Weights 2:1:1. "a" lands in the first slot half the time and in
        // the second slot with probability 1/4 * 2/3 + 1/4 * 2/3 = 1/3.
        let mut rng = StdRng::seed_from_u64(99);
        let population = ["a", "b", "c"];
        let weights = [2.0, 1.0, 1.0];
        let trials = 60_000;
        let mut first_a = 0;
        let mut second_a = 0;
        for _ in 0..trials {
            let drawn = sample_k_distinct(&population, &weights, 2, &mut rng).unwrap();
            if *drawn[0] == "a" {
                first_a += 1;
            }
            if *drawn[1] == "a" {
                second_a += 1;
            }
        }
        let first = first_a as f64 / trials as f64;
        let second = second_a as f64 / trials as f64;
        assert!((first - 0.5).abs() < 0.01, "first slot frequency {first}");
        assert!((second - 1.0 / 3.0).abs() < 0.01, "second slot frequency {second}");
    }

    #[test]
    fn same_seed_same_draw() {
        let population: Vec<u32> = (0..20).collect();
        let weights: Vec<f64> = (1..=20).map(f64::from).collect();
        let a = sample_k_distinct(&population, &weights, 3, &mut StdRng::seed_from_u64(5)).unwrap();
        let b = sample_k_distinct(&population, &weights, 3, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn k_distinct_has_no_duplicates(
            weights in prop::collection::vec(0.01f64..100.0, 1..30),
            k_seed in any::<usize>(),
            seed in any::<u64>(),
        ) {
            let population: Vec<usize> = (0..weights.len()).collect();
            let k = k_seed % (weights.len() + 1);
            let mut rng = StdRng::seed_from_u64(seed);
            let drawn = sample_k_distinct(&population, &weights, k, &mut rng).unwrap();
            prop_assert_eq!(drawn.len(), k);
            let unique: HashSet<_> = drawn.iter().collect();
            prop_assert_eq!(unique.len(), k);
        }

        #[test]
        fn oversized_k_always_fails(
            len in 1usize..20,
            extra in 1usize..5,
            seed in any::<u64>(),
        ) {
            let population: Vec<usize> = (0..len).collect();
            let weights = vec![1.0; len];
            let mut rng = StdRng::seed_from_u64(seed);
            let result = sample_k_distinct(&population, &weights, len + extra, &mut rng);
            prop_assert_eq!(
                result,
                Err(SampleError::InvalidSampleSize { requested: len + extra, available: len })
            );
        }

        #[test]
        fn sample_one_stays_in_population(
            weights in prop::collection::vec(0.001f64..1000.0, 1..50),
            seed in any::<u64>(),
        ) {
            let population: Vec<usize> = (0..weights.len()).collect();
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = *sample_one(&population, &weights, &mut rng).unwrap();
            prop_assert!(picked < population.len());
        }
    }
}
