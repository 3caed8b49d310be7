//! Utility functions for sorting operations
//!
//! Sorting with a fallible comparator is split in two steps: a stable merge
//! sort computes the target permutation as a list of indices, and only when
//! every comparison succeeded is the permutation applied to the slice.

use std::cmp::Ordering;

/// Stable bottom-up merge sort over the indices `0..len`.
///
/// `compare(i, j)` orders the elements at original positions `i` and `j`.
/// The first error aborts the sort and is returned as is. On success the
/// result lists, for each target position, the original position of the
/// element that belongs there.
pub fn try_merge_sort_indices<E, F>(len: usize, mut compare: F) -> Result<Vec<usize>, E>
where
    F: FnMut(usize, usize) -> Result<Ordering, E>,
{
    let mut indices: Vec<usize> = (0..len).collect();
    if len < 2 {
        return Ok(indices);
    }

    let mut buffer = vec![0; len];
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            merge(
                &indices[start..mid],
                &indices[mid..end],
                &mut buffer[start..end],
                &mut compare,
            )?;
            start = end;
        }
        std::mem::swap(&mut indices, &mut buffer);
        width *= 2;
    }
    Ok(indices)
}

fn merge<E, F>(
    left: &[usize],
    right: &[usize],
    dest: &mut [usize],
    compare: &mut F,
) -> Result<(), E>
where
    F: FnMut(usize, usize) -> Result<Ordering, E>,
{
    let (mut l, mut r) = (0, 0);
    for slot in dest.iter_mut() {
        // ties take from the left run
        let take_right = l == left.len()
            || (r < right.len() && compare(left[l], right[r])? == Ordering::Greater);
        if take_right {
            *slot = right[r];
            r += 1;
        } else {
            *slot = left[l];
            l += 1;
        }
    }
    Ok(())
}

/// Reorder items in-place based on the given indices
///
/// Each index in `indices` names the original position of the element that
/// should end up at that position. Cycles of the permutation are followed
/// with swaps, so no element is cloned.
pub fn apply_permutation<T>(items: &mut [T], mut indices: Vec<usize>) {
    debug_assert_eq!(
        items.len(),
        indices.len(),
        "Indices length must match items length"
    );

    for start in 0..indices.len() {
        let mut current = start;
        loop {
            let next = indices[current];
            indices[current] = current;
            if next == start {
                break;
            }
            debug_assert!(next < items.len(), "Index out of bounds");
            items.swap(current, next);
            current = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sort_by_key(keys: &[i32]) -> Vec<usize> {
        try_merge_sort_indices::<(), _>(keys.len(), |i, j| Ok(keys[i].cmp(&keys[j]))).unwrap()
    }

    #[test]
    fn test_apply_permutation() {
        let mut items = vec!["a", "b", "c", "d"];
        apply_permutation(&mut items, vec![3, 1, 0, 2]); // d, b, a, c
        assert_eq!(items, vec!["d", "b", "a", "c"]);

        let mut items = vec![1, 2, 3, 4, 5];
        apply_permutation(&mut items, vec![1, 2, 3, 4, 0]);
        assert_eq!(items, vec![2, 3, 4, 5, 1]);
    }

    #[test]
    fn test_merge_sort_orders_indices() {
        assert!(sort_by_key(&[]).is_empty());
        assert_eq!(sort_by_key(&[7]), vec![0]);
        assert_eq!(sort_by_key(&[3, 1, 2]), vec![1, 2, 0]);

        let keys = [9, -4, 12, 0, 5, 5, -20, 33, 1];
        let mut values = keys.to_vec();
        apply_permutation(&mut values, sort_by_key(&keys));
        assert!(values.is_sorted());
    }

    #[test]
    fn test_merge_sort_is_stable() {
        let keys = [2, 1, 2, 1, 2, 1, 0];
        assert_eq!(sort_by_key(&keys), vec![6, 1, 3, 5, 0, 2, 4]);
    }

    #[test]
    fn test_merge_sort_stops_at_first_error() {
        let mut calls = 0;
        let result = try_merge_sort_indices(6, |i, j| {
            calls += 1;
            if i == 4 || j == 4 {
                Err("boom")
            } else {
                Ok(i.cmp(&j))
            }
        });
        assert_eq!(result, Err("boom"));
        assert!(calls <= 5);
    }
}
