// ============================================================================
// Aggregator Factory
// Creates aggregators with validated configuration
// ============================================================================

use crate::domain::config::AggregationConfig;
use crate::engine::Aggregator;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates an aggregator from configuration
///
/// # Arguments
/// * `config` - Rounding and depth settings
///
/// # Returns
/// * `Result<Aggregator, String>` - Configured aggregator or validation error
///
/// # Example
/// ```
/// use tree_aggregator::prelude::*;
///
/// let aggregator = create_from_config(AggregationConfig::currency()).unwrap();
/// assert_eq!(aggregator.config().average_scale, 2);
/// ```
pub fn create_from_config(config: AggregationConfig) -> Result<Aggregator, String> {
    config.validate()?;
    Ok(Aggregator::from_validated(config))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating aggregators with fluent API
///
/// # Example
/// ```
/// use tree_aggregator::prelude::*;
///
/// let aggregator = AggregatorBuilder::new()
///     .average_scale(4)
///     .max_depth(64)
///     .build()
///     .unwrap();
///
/// assert_eq!(aggregator.config().max_depth, Some(64));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AggregatorBuilder {
    config: AggregationConfig,
}

impl AggregatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decimal places of AVERAGE results
    pub fn average_scale(mut self, scale: u32) -> Self {
        self.config.average_scale = scale;
        self
    }

    /// Deepest level the traversal may visit
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = Some(depth);
        self
    }

    /// Remove any depth limit
    pub fn unlimited_depth(mut self) -> Self {
        self.config.max_depth = None;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    pub fn whole_units() -> Self {
        Self {
            config: AggregationConfig::whole_units(),
        }
    }

    pub fn currency() -> Self {
        Self {
            config: AggregationConfig::currency(),
        }
    }

    pub fn high_precision() -> Self {
        Self {
            config: AggregationConfig::high_precision(),
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    pub fn build(self) -> Result<Aggregator, String> {
        create_from_config(self.config)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &AggregationConfig {
        &self.config
    }
}
