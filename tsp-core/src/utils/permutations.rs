#[cfg(test)]
#[path = "../../tests/unit/utils/permutations_test.rs"]
mod permutations_test;

/// Returns permutations of indices `0..size` in lexicographic order, starting from identity.
/// Exactly `size!` permutations are produced, including a single empty one for zero size.
pub fn get_permutations(size: usize) -> Permutations {
    Permutations { idxs: (0..size).collect(), is_started: false, is_finished: false }
}

/// An iterator over index permutations in lexicographic order.
pub struct Permutations {
    idxs: Vec<usize>,
    is_started: bool,
    is_finished: bool,
}

impl Permutations {
    /// Moves to the next permutation and returns it without extra allocation.
    pub fn advance(&mut self) -> Option<&[usize]> {
        if self.is_finished {
            return None;
        }

        if !self.is_started {
            self.is_started = true;
        } else if !next_permutation(self.idxs.as_mut_slice()) {
            self.is_finished = true;
            return None;
        }

        Some(self.idxs.as_slice())
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(|idxs| idxs.to_vec())
    }
}

/// Rearranges values into lexicographically next greater permutation.
/// Returns false when values are already in the last (descending) permutation.
fn next_permutation(values: &mut [usize]) -> bool {
    if values.len() < 2 {
        return false;
    }

    let Some(pivot) = (0..values.len() - 1).rev().find(|&idx| values[idx] < values[idx + 1]) else {
        return false;
    };

    // NOTE suffix after pivot is in descending order, so the rightmost greater value is the smallest one
    let successor = (pivot + 1..values.len()).rev().find(|&idx| values[idx] > values[pivot]).unwrap_or(pivot + 1);

    values.swap(pivot, successor);
    values[pivot + 1..].reverse();

    true
}
