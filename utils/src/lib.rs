use std::collections::HashMap;
use std::hash::Hash;

// Critical values of the chi-square distribution at significance level 0.001,
// indexed by degrees of freedom (1..=10)
const CHI_SQUARE_999: [f64; 10] = [
    10.828, 13.816, 16.266, 18.467, 20.515, 22.458, 24.322, 26.124, 27.877, 29.588,
];

pub fn frequencies<T, I>(draws: I) -> HashMap<T, u64>
where I: IntoIterator<Item = T>, T: Eq + Hash {
    let mut counts = HashMap::new();
    for x in draws {
        *counts.entry(x).or_insert(0) += 1;
    }
    counts
}

// Pearson's statistic against a uniform expectation over `categories` bins.
// Bins that never occurred still contribute their expected count.
pub fn chi_square(observed: &[u64], categories: usize) -> f64 {
    assert!(categories > 0 && observed.len() <= categories);
    let total: u64 = observed.iter().sum();
    let expected = total as f64 / categories as f64;
    let seen: f64 = observed.iter()
        .map(|&o| (o as f64 - expected).powi(2) / expected)
        .sum();
    let missing = (categories - observed.len()) as f64 * expected;
    seen + missing
}

// True if the counts are consistent with a uniform distribution
pub fn looks_uniform(observed: &[u64], categories: usize) -> bool {
    let df = categories - 1;
    assert!((1..=CHI_SQUARE_999.len()).contains(&df), "unsupported degrees of freedom");
    chi_square(observed, categories) < CHI_SQUARE_999[df - 1]
}
