//! Uniform random sampling over loaded datasets.

use rand::Rng;
use rand::seq::SliceRandom;

/// Draw `min(count, items.len())` distinct elements from `items`.
///
/// The references are shuffled on a copy (Fisher-Yates, via
/// [`SliceRandom::shuffle`]) and the first `count` are kept, so every
/// ordering of the sample is equally likely. `items` itself is never
/// reordered.
pub fn random_sample<'a, T, R>(items: &'a [T], count: usize, rng: &mut R) -> Vec<&'a T>
where
    R: Rng + ?Sized,
{
    let mut shuffled: Vec<&T> = items.iter().collect();
    shuffled.shuffle(rng);
    shuffled.truncate(count.min(items.len()));
    shuffled
}
