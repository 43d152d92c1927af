//! Random source adapter backed by `rand`

use quotebook_application::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// [`RandomSource`] using a `StdRng` seeded from the OS
pub struct StdRandomSource {
    rng: Mutex<StdRng>,
}

impl StdRandomSource {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }
}

impl Default for StdRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for StdRandomSource {
    fn next_index(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_in_range() {
        let source = StdRandomSource::new();
        for len in 1..20 {
            assert!(source.next_index(len) < len);
        }
        assert_eq!(source.next_index(1), 0);
    }

    #[test]
    fn test_covers_every_index() {
        let source = StdRandomSource::new();
        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[source.next_index(3)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
