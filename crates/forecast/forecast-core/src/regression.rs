//! Ordinary least squares on a single feature
//!
//! Fits `y = intercept + slope * x` in closed form.

use forecast_spi::{ForecastError, Regressor, Result};
use serde::{Deserialize, Serialize};

/// Linear regression of a scalar target on a scalar feature
///
/// # Example
///
/// ```rust
/// use forecast_core::regression::LinearRegression;
/// use forecast_spi::Regressor;
///
/// let x = vec![0.0, 1.0, 2.0, 3.0];
/// let y = vec![10.0, 12.0, 14.0, 16.0];
/// let mut model = LinearRegression::new();
/// model.fit(&x, &y).unwrap();
///
/// assert!((model.predict_at(4.0).unwrap() - 18.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearRegression {
    /// Y-intercept
    intercept: f64,
    /// Change in target per unit of feature
    slope: f64,
    /// Number of observations used in fitting
    n_observations: usize,
    /// R-squared value
    r_squared: f64,
    /// Whether model has been fitted
    fitted: bool,
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearRegression {
    /// Create a new, unfitted model
    pub fn new() -> Self {
        Self {
            intercept: 0.0,
            slope: 0.0,
            n_observations: 0,
            r_squared: 0.0,
            fitted: false,
        }
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Coefficient of determination of the last fit
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    pub fn n_observations(&self) -> usize {
        self.n_observations
    }

    /// Residuals `y - ŷ` for the given observations; empty before fitting
    ///
    /// ```rust
    /// use forecast_core::regression::LinearRegression;
    /// use forecast_spi::Regressor;
    ///
    /// let x = vec![0.0, 1.0, 2.0, 3.0];
    /// let y = vec![1.0, 2.0, 2.0, 4.0];
    /// let mut model = LinearRegression::new();
    /// assert!(model.residuals(&x, &y).is_empty());
    ///
    /// model.fit(&x, &y).unwrap();
    /// let residuals = model.residuals(&x, &y);
    /// assert_eq!(residuals.len(), 4);
    /// assert!(residuals.iter().sum::<f64>().abs() < 1e-10);
    /// ```
    pub fn residuals(&self, features: &[f64], targets: &[f64]) -> Vec<f64> {
        if !self.fitted {
            return Vec::new();
        }

        features
            .iter()
            .zip(targets)
            .map(|(&x, &y)| y - (self.intercept + self.slope * x))
            .collect()
    }
}

impl Regressor for LinearRegression {
    fn fit(&mut self, features: &[f64], targets: &[f64]) -> Result<()> {
        if features.len() != targets.len() {
            return Err(ForecastError::InvalidParameter {
                name: "targets".to_string(),
                reason: format!(
                    "expected {} values to match features, got {}",
                    features.len(),
                    targets.len()
                ),
            });
        }
        if features.len() < 2 {
            return Err(ForecastError::InsufficientData {
                required: 2,
                actual: features.len(),
            });
        }

        let n = features.len() as f64;

        let sum_x: f64 = features.iter().sum();
        let sum_y: f64 = targets.iter().sum();
        let sum_xx: f64 = features.iter().map(|x| x * x).sum();
        let sum_xy: f64 = features.iter().zip(targets).map(|(x, y)| x * y).sum();

        // OLS formulas
        let denominator = n * sum_xx - sum_x * sum_x;
        if denominator.abs() < 1e-10 {
            return Err(ForecastError::NumericalError(
                "Singular matrix in regression: feature has zero variance".to_string(),
            ));
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;

        let mean_y = sum_y / n;
        let ss_tot: f64 = targets.iter().map(|&y| (y - mean_y).powi(2)).sum();
        let ss_res: f64 = features
            .iter()
            .zip(targets)
            .map(|(&x, &y)| (y - (intercept + slope * x)).powi(2))
            .sum();

        self.slope = slope;
        self.intercept = intercept;
        self.n_observations = features.len();
        self.r_squared = if ss_tot > 1e-10 {
            1.0 - ss_res / ss_tot
        } else {
            1.0
        };
        self.fitted = true;
        Ok(())
    }

    fn predict_at(&self, feature: f64) -> Result<f64> {
        if !self.fitted {
            return Err(ForecastError::NotTrained);
        }
        Ok(self.intercept + self.slope * feature)
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}
