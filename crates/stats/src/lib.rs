//! Statistical helper functions for the siting workspace.
//!
//! Spread is measured with the population (N) denominator throughout: the
//! samples summarised here are complete populations (every demand point,
//! every facility), not draws from a larger one.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Population variance with N denominator. Returns 0.0 if empty.
pub fn population_variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / data.len() as f64
}

/// Population standard deviation with N denominator. Returns 0.0 if empty.
pub fn population_sd(data: &[f64]) -> f64 {
    population_variance(data).sqrt()
}

/// Largest value of a slice, ignoring NaN. Returns 0.0 if empty.
pub fn max(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Coefficient of variation `population_sd / mean`.
///
/// Returns 0.0 when the mean is not positive, so an empty or all-zero input
/// reads as perfectly balanced.
pub fn coefficient_of_variation(data: &[f64]) -> f64 {
    let m = mean(data);
    if m > 0.0 { population_sd(data) / m } else { 0.0 }
}

/// Rounds to `decimals` places, halves to even.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round_ties_even() / scale
}
