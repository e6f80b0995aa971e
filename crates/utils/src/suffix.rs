//! Random filename suffixes for stored values files.
//!
//! Handlers share one [`SuffixGenerator`] through application state, so the
//! underlying RNG must be safe to call from concurrent requests.

use std::{
    sync::Mutex,
    time::{SystemTime, UNIX_EPOCH},
};

use rand::{Rng, SeedableRng, rngs::StdRng};

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Produces random alphabetic strings used as filename components.
pub trait SuffixGenerator: Send + Sync {
    /// Returns exactly `length` characters drawn from `[a-zA-Z]`.
    fn generate(&self, length: usize) -> String;
}

/// A [`SuffixGenerator`] backed by a single seeded [`StdRng`].
pub struct SeededSuffixGenerator {
    rng: Mutex<StdRng>,
}

impl SeededSuffixGenerator {
    /// Seeds the generator once from the current wall-clock time.
    pub fn from_time() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        tracing::debug!("Seeding suffix generator with {}", seed);
        Self::with_seed(seed)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl SuffixGenerator for SeededSuffixGenerator {
    fn generate(&self, length: usize) -> String {
        // A panic mid-sample leaves the RNG in a usable state.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        (0..length)
            .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, sync::Arc, thread};

    use super::*;

    #[test]
    fn test_generate_length_and_alphabet() {
        let generator = SeededSuffixGenerator::from_time();
        for length in [1, 10, 64] {
            let suffix = generator.generate(length);
            assert_eq!(suffix.chars().count(), length);
            assert!(suffix.chars().all(|c| c.is_ascii_alphabetic()), "{suffix}");
        }
    }

    #[test]
    fn test_generate_zero_length_is_empty() {
        assert_eq!(SeededSuffixGenerator::with_seed(7).generate(0), "");
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let a = SeededSuffixGenerator::with_seed(42);
        let b = SeededSuffixGenerator::with_seed(42);
        assert_eq!(a.generate(10), b.generate(10));
        assert_eq!(a.generate(10), b.generate(10));
    }

    #[test]
    fn test_successive_suffixes_differ() {
        let generator = SeededSuffixGenerator::with_seed(1);
        assert_ne!(generator.generate(10), generator.generate(10));
    }

    #[test]
    fn test_uses_both_cases() {
        let generator = SeededSuffixGenerator::with_seed(3);
        let sample = generator.generate(2_000);
        assert!(sample.chars().any(|c| c.is_ascii_lowercase()));
        assert!(sample.chars().any(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_shared_across_threads() {
        let generator = Arc::new(SeededSuffixGenerator::from_time());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let generator = Arc::clone(&generator);
                thread::spawn(move || (0..50).map(|_| generator.generate(10)).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for suffix in handle.join().unwrap() {
                assert_eq!(suffix.len(), 10);
                seen.insert(suffix);
            }
        }
        assert_eq!(seen.len(), 400);
    }
}
