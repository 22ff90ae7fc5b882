use super::*;

// Shared test helpers
#[cfg(feature = "serde")]
fn lcg_sizes(seed: u64, len: usize) -> Vec<usize> {
    let mut x = seed;
    let mut out = Vec::new();
    let mut total = 0usize;
    while total < len {
        // LCG: constants from Numerical Recipes
        x = x.wrapping_mul(1664525).wrapping_add(1013904223);
        // chunk size in [1..8]
        let mut n = (((x >> 24) as usize) % 8) + 1;
        if total + n > len {
            n = len - total;
        }
        out.push(n);
        total += n;
    }
    out
}

#[cfg(feature = "serde")]
fn chunk_by_char(s: &str, sizes: &[usize]) -> Vec<String> {
    let mut res = Vec::new();
    let mut iter = s.chars();
    for &n in sizes {
        let mut chunk = String::new();
        for _ in 0..n {
            if let Some(c) = iter.next() {
                chunk.push(c);
            } else {
                break;
            }
        }
        if !chunk.is_empty() {
            res.push(chunk);
        }
    }
    let rest: String = iter.collect();
    if !rest.is_empty() {
        res.push(rest);
    }
    res
}

/// Every non-empty prefix of `s` that ends on a char boundary, the full
/// text included.
#[cfg(feature = "serde")]
fn char_prefixes(s: &str) -> impl Iterator<Item = &str> {
    (1..=s.len())
        .filter(|&i| s.is_char_boundary(i))
        .map(|i| &s[..i])
}
