//! Permutations and compositions used by the brute-force puzzles.

/// All orderings of `0..n`, lexicographically sorted.
///
/// `permutations(0)` is empty; `permutations(1)` is `[[0]]`.
pub fn permutations(n: usize) -> Vec<Vec<usize>> {
    if n == 0 {
        return Vec::new();
    }

    let mut current: Vec<usize> = (0..n).collect();
    let mut result = vec![current.clone()];
    while next_permutation(&mut current) {
        result.push(current.clone());
    }
    result
}

/// Rearranges `items` into the next lexicographic permutation.
/// Returns false (leaving `items` untouched) when already at the last one.
pub fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    if items.len() < 2 {
        return false;
    }

    let mut pivot = items.len() - 1;
    while pivot > 0 && items[pivot - 1] >= items[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        return false;
    }

    let mut successor = items.len() - 1;
    while items[successor] <= items[pivot - 1] {
        successor -= 1;
    }
    items.swap(pivot - 1, successor);
    items[pivot..].reverse();
    true
}

/// Every way to split `total` into `buckets` ordered parts, each at least `min`.
///
/// With `min = 1` no bucket is left empty: `compositions(2, 4, 1)` yields
/// `[1, 3]`, `[2, 2]` and `[3, 1]`.
pub fn compositions(buckets: usize, total: u32, min: u32) -> Vec<Vec<u32>> {
    let mut result = Vec::new();
    if buckets == 0 || (buckets as u64) * (min as u64) > total as u64 {
        return result;
    }

    let mut current = Vec::with_capacity(buckets);
    fill(buckets, total, min, &mut current, &mut result);
    result
}

fn fill(buckets: usize, remaining: u32, min: u32, current: &mut Vec<u32>, out: &mut Vec<Vec<u32>>) {
    if buckets == 1 {
        current.push(remaining);
        out.push(current.clone());
        current.pop();
        return;
    }

    // leave enough for the buckets still to come
    let reserved = (buckets as u32 - 1) * min;
    for amount in min..=(remaining - reserved) {
        current.push(amount);
        fill(buckets - 1, remaining - amount, min, current, out);
        current.pop();
    }
}
