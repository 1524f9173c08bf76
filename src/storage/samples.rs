//! Sample set for the statistics buttons.

use crate::domain::error::{CalcError, Result};

/// Ordered list of samples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    values: Vec<f64>,
}

impl SampleSet {
    /// Appends a sample and returns the new count.
    pub fn add(&mut self, value: f64) -> usize {
        self.values.push(value);
        self.values.len()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Arithmetic mean.
    ///
    /// # Errors
    ///
    /// [`CalcError::NoData`] when the set is empty.
    pub fn mean(&self) -> Result<f64> {
        if self.values.is_empty() {
            return Err(CalcError::NoData);
        }
        #[allow(clippy::cast_precision_loss)]
        Ok(self.values.iter().sum::<f64>() / self.values.len() as f64)
    }

    /// Sample variance (`n - 1` divisor).
    ///
    /// # Errors
    ///
    /// [`CalcError::InsufficientData`] with fewer than two samples.
    ///
    /// # Examples
    ///
    /// ```
    /// use fraccalc::storage::SampleSet;
    ///
    /// let mut samples = SampleSet::default();
    /// for v in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
    ///     samples.add(v);
    /// }
    /// assert!((samples.variance()? - 32.0 / 7.0).abs() < 1e-12);
    /// # Ok::<(), fraccalc::CalcError>(())
    /// ```
    pub fn variance(&self) -> Result<f64> {
        if self.values.len() < 2 {
            return Err(CalcError::InsufficientData);
        }
        let mean = self.mean()?;
        let squared: f64 = self.values.iter().map(|v| (v - mean).powi(2)).sum();
        #[allow(clippy::cast_precision_loss)]
        Ok(squared / (self.values.len() - 1) as f64)
    }

    /// Sample standard deviation.
    ///
    /// # Errors
    ///
    /// Same as [`SampleSet::variance`].
    pub fn std_dev(&self) -> Result<f64> {
        self.variance().map(f64::sqrt)
    }
}
