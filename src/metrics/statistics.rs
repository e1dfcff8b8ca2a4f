use serde::{Deserialize, Serialize};

/// Statistics for a collection of values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl Statistics {
    /// Compute statistics from a slice of values
    pub fn from_slice(values: &[f64]) -> Self {
        if values.is_empty() {
            return Statistics {
                mean: 0.0,
                std: 0.0,
                min: 0.0,
                max: 0.0,
                count: 0,
            };
        }

        let count = values.len();
        let sum: f64 = values.iter().sum();
        let mean = sum / count as f64;

        let variance = values.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / count as f64;
        let std = variance.sqrt();

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Statistics {
            mean,
            std,
            min,
            max,
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice() {
        let stats = Statistics::from_slice(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(stats.count, 4);
        assert_eq!(stats.mean, 2.5);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 4.0);
        assert!((stats.std - 1.25f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_empty_slice() {
        let stats = Statistics::from_slice(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean, 0.0);
    }
}
