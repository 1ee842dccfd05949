//! Descriptive statistics over `f64` slices.
//!
//! All functions expect finite values; callers filter missing/NaN entries
//! before calling. Functions return `None` when the input cannot support
//! the statistic (usually: empty input).

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample variance (n − 1 denominator). Zero for a single value.
pub fn variance(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    let n = values.len() as f64;
    if values.len() < 2 {
        return Some(0.0);
    }
    let sum_sq: f64 = values.iter().map(|value| (value - mean).powi(2)).sum();
    Some(sum_sq / (n - 1.0))
}

/// Sample standard deviation.
pub fn std_dev(values: &[f64]) -> Option<f64> {
    variance(values).map(f64::sqrt)
}

pub fn min(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::min)
}

pub fn max(values: &[f64]) -> Option<f64> {
    values.iter().copied().reduce(f64::max)
}

/// Median (50th percentile).
pub fn median(values: &[f64]) -> Option<f64> {
    quantile(values, 0.5)
}

/// Quantile with linear interpolation between adjacent order statistics.
/// `q` is clamped to [0, 1].
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let q = q.clamp(0.0, 1.0);
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    if lower == upper {
        return Some(sorted[lower]);
    }
    let weight = position - lower as f64;
    Some(sorted[lower] * (1.0 - weight) + sorted[upper] * weight)
}

/// Skewness as the mean of cubed standardized deviations. Zero when the
/// standard deviation is zero.
pub fn skewness(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    let std = std_dev(values)?;
    if std == 0.0 {
        return Some(0.0);
    }
    let n = values.len() as f64;
    let sum_cubed: f64 = values
        .iter()
        .map(|value| ((value - mean) / std).powi(3))
        .sum();
    Some(sum_cubed / n)
}

/// Pearson correlation coefficient of two equally long slices. `None`
/// when fewer than two pairs exist or either side has zero variance.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let mean_x = mean(xs)?;
    let mean_y = mean(ys)?;
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov / (var_x.sqrt() * var_y.sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn std_dev_basic() {
        // Sample std of 1..=5 is sqrt(2.5).
        let std = std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]).expect("std");
        assert!((std - 2.5_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn std_dev_degenerate() {
        assert_eq!(std_dev(&[5.0]), Some(0.0));
        assert_eq!(std_dev(&[7.0, 7.0, 7.0]), Some(0.0));
        assert_eq!(std_dev(&[]), None);
    }

    #[test]
    fn median_odd_even() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }

    #[test]
    fn quantile_interpolates() {
        let values: Vec<f64> = (0..=100).map(f64::from).collect();
        assert_eq!(quantile(&values, 0.25), Some(25.0));
        assert_eq!(quantile(&values, 0.75), Some(75.0));
        assert_eq!(quantile(&values, 0.0), Some(0.0));
        assert_eq!(quantile(&values, 1.0), Some(100.0));
    }

    #[test]
    fn skewness_symmetric_is_zero() {
        let skew = skewness(&[1.0, 2.0, 3.0, 4.0, 5.0]).expect("skew");
        assert!(skew.abs() < 1e-12);
    }

    #[test]
    fn skewness_right_tail_positive() {
        let skew = skewness(&[1.0, 1.0, 1.0, 1.0, 10.0]).expect("skew");
        assert!(skew > 0.5);
    }

    #[test]
    fn skewness_zero_variance() {
        assert_eq!(skewness(&[2.0, 2.0, 2.0]), Some(0.0));
    }

    #[test]
    fn pearson_perfect_correlation() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [2.0, 4.0, 6.0, 8.0];
        let r = pearson(&xs, &ys).expect("pearson");
        assert!((r - 1.0).abs() < 1e-12);

        let neg: Vec<f64> = ys.iter().map(|y| -y).collect();
        let r = pearson(&xs, &neg).expect("pearson");
        assert!((r + 1.0).abs() < 1e-12);
    }

    #[test]
    fn pearson_degenerate() {
        assert_eq!(pearson(&[1.0, 2.0], &[3.0]), None);
        assert_eq!(pearson(&[1.0], &[2.0]), None);
        assert_eq!(pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]), None);
    }
}
