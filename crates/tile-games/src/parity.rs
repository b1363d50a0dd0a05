/// Whether `permutation` is even, i.e. has an even number of inversions.
///
/// An even permutation of the fifteen tiles is solvable when the gap
/// sits in the bottom-right corner, so the random initializer keeps
/// shuffling until this holds.
pub fn is_even<T: Ord>(permutation: &[T]) -> bool {
    let mut inversions = 0usize;
    for (k, a) in permutation.iter().enumerate() {
        inversions += permutation[k + 1..].iter().filter(|&b| a > b).count();
    }
    inversions % 2 == 0
}
