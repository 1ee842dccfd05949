//! Plot geometry: histograms and box plots computed here, rendered by
//! the caller.

const HISTOGRAM_BINS: usize = 10;

/// One histogram bin over `[lower, upper)`; the last bin is inclusive.
#[derive(Debug, Clone)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

/// Ten equal-width bins over `[min, max]`. A constant column collapses
/// to a single bin. Empty input produces no bins.
pub fn build_histogram(values: &[f64]) -> Histogram {
    let Some(min) = eda_stats::min(values) else {
        return Histogram { bins: Vec::new() };
    };
    let max = eda_stats::max(values).unwrap_or(min);
    if max == min {
        return Histogram {
            bins: vec![HistogramBin {
                lower: min,
                upper: max,
                count: values.len(),
            }],
        };
    }
    let width = (max - min) / HISTOGRAM_BINS as f64;
    let mut bins: Vec<HistogramBin> = (0..HISTOGRAM_BINS)
        .map(|index| HistogramBin {
            lower: min + width * index as f64,
            upper: min + width * (index + 1) as f64,
            count: 0,
        })
        .collect();
    for &value in values {
        let index = (((value - min) / width) as usize).min(HISTOGRAM_BINS - 1);
        bins[index].count += 1;
    }
    Histogram { bins }
}

/// Five-number summary plus Tukey whiskers (1.5 * IQR fences clamped to
/// the data range).
#[derive(Debug, Clone)]
pub struct BoxPlot {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub lower_whisker: f64,
    pub upper_whisker: f64,
}

pub fn build_box_plot(values: &[f64]) -> Option<BoxPlot> {
    let min = eda_stats::min(values)?;
    let max = eda_stats::max(values)?;
    let q1 = eda_stats::quantile(values, 0.25)?;
    let median = eda_stats::median(values)?;
    let q3 = eda_stats::quantile(values, 0.75)?;
    let iqr = q3 - q1;
    let lower_fence = q1 - 1.5 * iqr;
    let upper_fence = q3 + 1.5 * iqr;
    // Whiskers stop at the most extreme value inside the fences.
    let lower_whisker = values
        .iter()
        .copied()
        .filter(|&value| value >= lower_fence)
        .fold(max, f64::min);
    let upper_whisker = values
        .iter()
        .copied()
        .filter(|&value| value <= upper_fence)
        .fold(min, f64::max);
    Some(BoxPlot {
        min,
        q1,
        median,
        q3,
        max,
        lower_whisker,
        upper_whisker,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_counts_sum_to_input_length() {
        let values: Vec<f64> = (0..97).map(f64::from).collect();
        let histogram = build_histogram(&values);
        assert_eq!(histogram.bins.len(), 10);
        let total: usize = histogram.bins.iter().map(|bin| bin.count).sum();
        assert_eq!(total, 97);
    }

    #[test]
    fn histogram_max_lands_in_last_bin() {
        let histogram = build_histogram(&[0.0, 5.0, 10.0]);
        assert_eq!(histogram.bins.last().expect("bins").count, 1);
    }

    #[test]
    fn constant_column_single_bin() {
        let histogram = build_histogram(&[4.0, 4.0, 4.0]);
        assert_eq!(histogram.bins.len(), 1);
        assert_eq!(histogram.bins[0].count, 3);
    }

    #[test]
    fn empty_input_no_bins() {
        assert!(build_histogram(&[]).bins.is_empty());
    }

    #[test]
    fn box_plot_five_numbers() {
        let values: Vec<f64> = (0..=100).map(f64::from).collect();
        let plot = build_box_plot(&values).expect("plot");
        assert_eq!(plot.min, 0.0);
        assert_eq!(plot.max, 100.0);
        assert!((plot.median - 50.0).abs() < 1e-12);
        assert!((plot.q1 - 25.0).abs() < 1e-12);
        assert!((plot.q3 - 75.0).abs() < 1e-12);
        // No values beyond the fences, so whiskers touch the extremes.
        assert_eq!(plot.lower_whisker, 0.0);
        assert_eq!(plot.upper_whisker, 100.0);
    }

    #[test]
    fn box_plot_whiskers_exclude_outliers() {
        let mut values: Vec<f64> = (0..=20).map(f64::from).collect();
        values.push(500.0);
        let plot = build_box_plot(&values).expect("plot");
        assert_eq!(plot.max, 500.0);
        assert!(plot.upper_whisker < 500.0);
    }
}
