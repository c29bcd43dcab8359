//! Industry Weight Calculator - Aggregate weight label for an archetype.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ComparisonError;
use crate::domain::reference::{Archetype, FactorWeight};

/// Mean weight at or above which the industry weight is HIGH.
pub const HIGH_WEIGHT_THRESHOLD: f64 = 4.0;

/// Mean weight at or above which the industry weight is MEDIUM.
pub const MEDIUM_WEIGHT_THRESHOLD: f64 = 3.0;

/// Qualitative industry weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WeightLevel {
    Low,
    Medium,
    High,
}

impl WeightLevel {
    /// Classifies an unrounded mean weight.
    pub fn from_average(average: f64) -> Self {
        if average >= HIGH_WEIGHT_THRESHOLD {
            WeightLevel::High
        } else if average >= MEDIUM_WEIGHT_THRESHOLD {
            WeightLevel::Medium
        } else {
            WeightLevel::Low
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            WeightLevel::Low => "LOW",
            WeightLevel::Medium => "MEDIUM",
            WeightLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for WeightLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Derived industry weight of an archetype.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndustryWeight {
    /// Unrounded arithmetic mean of the factor weights.
    pub average: f64,
    pub level: WeightLevel,
}

impl IndustryWeight {
    /// The mean rounded to one decimal place, for display only.
    pub fn display_average(&self) -> f64 {
        (self.average * 10.0).round() / 10.0
    }
}

impl fmt::Display for IndustryWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Avg: {:.1})", self.level, self.display_average())
    }
}

/// Industry weight derivation functions.
pub struct IndustryWeightCalculator;

impl IndustryWeightCalculator {
    /// Derives the industry weight from factor weights.
    ///
    /// The level is classified on the unrounded mean, so 3.96 is MEDIUM even
    /// though it displays as 4.0.
    ///
    /// # Errors
    /// `EmptyWeights` when there are no factors.
    pub fn derive_industry_weight(
        weights: &[FactorWeight],
    ) -> Result<IndustryWeight, ComparisonError> {
        Self::derive_from_values(weights.iter().map(|w| w.weight.value()))
            .ok_or_else(|| ComparisonError::EmptyWeights {
                archetype: String::new(),
            })
    }

    /// Derives the industry weight of a named archetype.
    pub fn for_archetype(archetype: &Archetype) -> Result<IndustryWeight, ComparisonError> {
        Self::derive_industry_weight(&archetype.factors).map_err(|_| {
            ComparisonError::EmptyWeights {
                archetype: archetype.name.clone(),
            }
        })
    }

    fn derive_from_values(values: impl Iterator<Item = u8>) -> Option<IndustryWeight> {
        let (sum, count) = values.fold((0u32, 0u32), |(sum, count), v| {
            (sum + u32::from(v), count + 1)
        });
        if count == 0 {
            return None;
        }

        let average = f64::from(sum) / f64::from(count);
        Some(IndustryWeight {
            average,
            level: WeightLevel::from_average(average),
        })
    }
}
