// SPDX-License-Identifier: GPL-3.0-only

use std::collections::HashSet;

use rand::Rng;

/// Picks `count` distinct indices in `0..len`, uniformly, by drawing and
/// rejecting indices that were already used.
///
/// Never returns more than `len` indices, so a short listing can't spin forever.
pub fn pick_distinct_indices<R: Rng + ?Sized>(rng: &mut R, len: usize, count: usize) -> Vec<usize> {
    let count = count.min(len);
    let mut used = HashSet::with_capacity(count);
    let mut selection = Vec::with_capacity(count);

    while selection.len() < count {
        let index = rng.random_range(0..len);
        if used.insert(index) {
            selection.push(index);
        }
    }

    selection
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn never_repeats_an_index() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = pick_distinct_indices(&mut rng, 151, 5);

            let unique: HashSet<_> = picked.iter().collect();
            assert_eq!(picked.len(), 5);
            assert_eq!(unique.len(), 5, "seed {seed} repeated an index: {picked:?}");
            assert!(picked.iter().all(|i| *i < 151));
        }
    }

    #[test]
    fn caps_at_listing_size() {
        let mut rng = StdRng::seed_from_u64(7);

        let mut picked = pick_distinct_indices(&mut rng, 3, 5);
        picked.sort_unstable();
        assert_eq!(picked, vec![0, 1, 2]);

        assert!(pick_distinct_indices(&mut rng, 0, 5).is_empty());
    }

    #[test]
    fn same_seed_same_selection() {
        let first = pick_distinct_indices(&mut StdRng::seed_from_u64(42), 151, 5);
        let second = pick_distinct_indices(&mut StdRng::seed_from_u64(42), 151, 5);

        assert_eq!(first, second);
    }
}
