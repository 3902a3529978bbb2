// ============================================================================
// Aggregation Configuration
// Rounding and traversal limits applied by the aggregator
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest scale a decimal can carry
pub const MAX_AVERAGE_SCALE: u32 = 28;

/// Default decimal places for AVERAGE results
pub const DEFAULT_AVERAGE_SCALE: u32 = 2;

/// Configuration for an [`Aggregator`](crate::engine::Aggregator)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AggregationConfig {
    /// Decimal places of AVERAGE results (rounded half-up)
    pub average_scale: u32,

    /// Optional: Deepest level the traversal may visit (root is level 0)
    /// None means unlimited depth
    pub max_depth: Option<usize>,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            average_scale: DEFAULT_AVERAGE_SCALE,
            max_depth: None,
        }
    }
}

impl AggregationConfig {
    pub fn new(average_scale: u32) -> Self {
        Self {
            average_scale,
            max_depth: None,
        }
    }

    /// Builder method: Set AVERAGE result scale
    pub fn with_average_scale(mut self, scale: u32) -> Self {
        self.average_scale = scale;
        self
    }

    /// Builder method: Set maximum traversal depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.average_scale > MAX_AVERAGE_SCALE {
            return Err(format!(
                "Average scale {} exceeds the maximum of {}",
                self.average_scale, MAX_AVERAGE_SCALE
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl AggregationConfig {
    /// Averages rounded to whole units (ages, head counts)
    pub fn whole_units() -> Self {
        Self::new(0)
    }

    /// Averages rounded to cents
    pub fn currency() -> Self {
        Self::new(2)
    }

    /// Averages with ten decimal places
    pub fn high_precision() -> Self {
        Self::new(10)
    }
}
