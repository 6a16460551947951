//! Cyclic rotations of the item collection.

/// Wraps any offset, negative or past the end, into `0..len`.
///
/// Returns 0 for an empty collection.
pub fn normalize_offset(offset: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    offset.rem_euclid(len as i64) as usize
}

/// `items[k..] ++ items[..k]` with `k` wrapped into range.
pub fn rotation<T: Clone>(items: &[T], offset: i64) -> Vec<T> {
    let k = normalize_offset(offset, items.len());
    let mut window = Vec::with_capacity(items.len());
    window.extend_from_slice(&items[k..]);
    window.extend_from_slice(&items[..k]);
    window
}

/// Moves the head of the window to its tail.
pub fn rotate_left_one<T: Clone>(window: &[T]) -> Vec<T> {
    let mut shifted = window.to_vec();
    if !shifted.is_empty() {
        shifted.rotate_left(1);
    }
    shifted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_offset() {
        assert_eq!(normalize_offset(0, 3), 0);
        assert_eq!(normalize_offset(4, 3), 1);
        assert_eq!(normalize_offset(-1, 3), 2);
        assert_eq!(normalize_offset(-7, 3), 2);
        assert_eq!(normalize_offset(5, 0), 0);
    }

    #[test]
    fn test_rotation() {
        assert_eq!(rotation(&['a', 'b', 'c'], 0), vec!['a', 'b', 'c']);
        assert_eq!(rotation(&['a', 'b', 'c'], 1), vec!['b', 'c', 'a']);
        assert_eq!(rotation(&['a', 'b', 'c'], 5), vec!['c', 'a', 'b']);
        assert_eq!(rotation(&['a', 'b', 'c'], -1), vec!['c', 'a', 'b']);
        assert!(rotation::<char>(&[], 3).is_empty());
    }

    #[test]
    fn test_rotate_left_one() {
        assert_eq!(rotate_left_one(&[1, 2, 3]), vec![2, 3, 1]);
        assert_eq!(rotate_left_one(&[1]), vec![1]);
        assert!(rotate_left_one::<i32>(&[]).is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// A rotation only reorders, it never adds or drops items
        #[test]
        fn rotation_is_permutation(items in prop::collection::vec(any::<u8>(), 1..32), offset in any::<i64>()) {
            let mut rotated = rotation(&items, offset);
            let mut original = items.clone();
            rotated.sort_unstable();
            original.sort_unstable();
            prop_assert_eq!(rotated, original);
        }

        /// The head of the window is the item at the wrapped offset
        #[test]
        fn rotation_head_matches_offset(items in prop::collection::vec(any::<u8>(), 1..32), offset in any::<i64>()) {
            let rotated = rotation(&items, offset);
            let k = offset.rem_euclid(items.len() as i64) as usize;
            prop_assert_eq!(rotated[0], items[k]);
        }

        /// Shifting a window by one `len` times brings it back where it started
        #[test]
        fn full_cycle_is_identity(items in prop::collection::vec(any::<u8>(), 0..16)) {
            let mut window = items.clone();
            for _ in 0..items.len() {
                window = rotate_left_one(&window);
            }
            prop_assert_eq!(window, items);
        }
    }
}
