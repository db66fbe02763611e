//! Challenge question/answer generation.
//!
//! Pure generator: no shared state, safe to call concurrently. Each call picks
//! one of two challenge kinds uniformly at random.

use rand::seq::IndexedRandom;
use rand::Rng;

/// Phrases for the verbatim-rewrite challenge kind.
///
/// The empty string is a deliberate member: reproducing "nothing" is a valid
/// (if mischievous) challenge.
pub(crate) const REWRITE_PHRASES: &[&str] = &[
    "the knight rode his horse all the way to the moon",
    "the quick brown fox jumps over the lazy dog",
    "a watched pot never boils",
    "rainy days are made for poetry",
    "the library stayed quiet until the bell rang",
    "",
];

/// A generated challenge: the question to post and the expected answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Challenge {
    pub question: String,
    pub answer: String,
}

/// Generates a new challenge question/answer pair.
///
/// Picks arithmetic or verbatim-rewrite with equal probability. Never fails.
pub fn generate() -> Challenge {
    let mut rng = rand::rng();

    if rng.random_bool(0.5) {
        arithmetic(&mut rng)
    } else {
        rewrite(&mut rng)
    }
}

/// Sum of two integers drawn uniformly from 1..=50; the answer is the exact
/// decimal string of the sum.
fn arithmetic(rng: &mut impl Rng) -> Challenge {
    let a: u32 = rng.random_range(1..=50);
    let b: u32 = rng.random_range(1..=50);

    Challenge {
        question: format!("What is **{a} + {b}**?"),
        answer: (a + b).to_string(),
    }
}

/// Reproduce a fixed phrase verbatim; the answer is the phrase itself.
fn rewrite(rng: &mut impl Rng) -> Challenge {
    let phrase = REWRITE_PHRASES.choose(rng).copied().unwrap_or_default();

    Challenge {
        question: format!("Rewrite this phrase:\n`{phrase}`"),
        answer: phrase.to_string(),
    }
}
