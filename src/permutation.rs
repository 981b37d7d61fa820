/// Rearranges `indices` into the next permutation in lexicographic order. Returns `false` (and
/// leaves `indices` sorted ascending again) when `indices` was already the last permutation.
///
/// Starting from the ascending sequence and calling this until it returns `false` visits every
/// permutation exactly once, as long as all elements are distinct.
pub fn next_permutation(indices: &mut [usize]) -> bool {
	if indices.len() < 2 {
		return false;
	}

	// The suffix after `pivot` is non-increasing, so it is already its own last permutation
	let mut pivot = indices.len() - 1;
	while pivot > 0 && indices[pivot - 1] >= indices[pivot] {
		pivot -= 1;
	}
	if pivot == 0 {
		indices.reverse();
		return false;
	}
	let pivot = pivot - 1;

	let mut successor = indices.len() - 1;
	while indices[successor] <= indices[pivot] {
		successor -= 1;
	}
	indices.swap(pivot, successor);
	indices[pivot + 1..].reverse();
	true
}
