// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Proximity Ordering
//!
//! Stable merge sort of the spot collection, ascending by distance from
//! the entrance. Ties keep their original relative order, so the derived
//! ordering is a deterministic total order over any spot collection.
//!
//! The ordering is recomputed after every structural change to the lot
//! (spot insertion, snapshot replacement). Availability and rate changes
//! do not move a spot, so they trigger no re-sort.

use park_alloc_model::spot::Spot;

/// Sorts the collection ascending by distance, stable on ties.
pub fn sort_by_proximity(spots: &mut [Spot]) {
    if spots.len() > 1 {
        merge_sort(spots, 0, spots.len());
    }
}

// Recursive divide-and-conquer over the half-open range [lo, hi).
fn merge_sort(spots: &mut [Spot], lo: usize, hi: usize) {
    if hi - lo <= 1 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    merge_sort(spots, lo, mid);
    merge_sort(spots, mid, hi);
    merge(spots, lo, mid, hi);
}

fn merge(spots: &mut [Spot], lo: usize, mid: usize, hi: usize) {
    let left: Vec<Spot> = spots[lo..mid].to_vec();
    let right: Vec<Spot> = spots[mid..hi].to_vec();

    let (mut i, mut j, mut k) = (0, 0, lo);
    while i < left.len() && j < right.len() {
        // `<=` takes the left run first on equal distances; that is what
        // makes the sort stable.
        if left[i].distance() <= right[j].distance() {
            spots[k] = left[i];
            i += 1;
        } else {
            spots[k] = right[j];
            j += 1;
        }
        k += 1;
    }
    while i < left.len() {
        spots[k] = left[i];
        i += 1;
        k += 1;
    }
    while j < right.len() {
        spots[k] = right[j];
        j += 1;
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use park_alloc_core::{distance::Distance, money::Money};
    use park_alloc_model::{id::SpotId, spot::SlotSize};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn spot(id: u32, distance: f64) -> Spot {
        Spot::new(
            SpotId::new(id),
            SlotSize::Regular,
            Distance::new(distance),
            Money::new(5.0),
            Money::new(3.0),
        )
        .expect("valid spot")
    }

    fn is_non_decreasing(spots: &[Spot]) -> bool {
        spots
            .windows(2)
            .all(|w| w[0].distance() <= w[1].distance())
    }

    #[test]
    fn test_empty_and_single_are_noops() {
        let mut empty: Vec<Spot> = Vec::new();
        sort_by_proximity(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![spot(1, 10.0)];
        sort_by_proximity(&mut single);
        assert_eq!(single[0].id(), SpotId::new(1));
    }

    #[test]
    fn test_sorts_ascending_by_distance() {
        let mut spots = vec![
            spot(1, 30.0),
            spot(2, 10.0),
            spot(3, 20.0),
            spot(4, 5.0),
            spot(5, 25.0),
        ];
        sort_by_proximity(&mut spots);
        let ids: Vec<u32> = spots.iter().map(|s| s.id().value()).collect();
        assert_eq!(ids, vec![4, 2, 3, 5, 1]);
        assert!(is_non_decreasing(&spots));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let mut spots = vec![
            spot(10, 7.0),
            spot(11, 7.0),
            spot(12, 3.0),
            spot(13, 7.0),
        ];
        sort_by_proximity(&mut spots);
        let ids: Vec<u32> = spots.iter().map(|s| s.id().value()).collect();
        assert_eq!(ids, vec![12, 10, 11, 13]);
    }

    #[test]
    fn test_idempotent_on_sorted_input() {
        let mut spots: Vec<Spot> = (0..32).map(|i| spot(i, i as f64)).collect();
        let expected = spots.clone();
        sort_by_proximity(&mut spots);
        assert_eq!(spots, expected);
        sort_by_proximity(&mut spots);
        assert_eq!(spots, expected);
    }

    #[test]
    fn test_randomized_matches_stable_std_sort() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let mut spots: Vec<Spot> = (0..257u32)
            .map(|id| spot(id, rng.random_range(0..50) as f64))
            .collect();
        let mut expected = spots.clone();
        expected.sort_by(|a, b| {
            a.distance()
                .partial_cmp(&b.distance())
                .expect("finite distances")
        });

        sort_by_proximity(&mut spots);
        assert_eq!(spots, expected);
    }
}
