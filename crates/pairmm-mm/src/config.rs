//! Market making configuration.

use serde::{Deserialize, Serialize};

use pairmm_core::{CoreError, Price, MAXIMUM_ASK, MINIMUM_BID};
use pairmm_feed::DEPTH;

/// Configuration for the spread quoting strategy.
///
/// Fixed at process start; nothing here is re-derived at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MakerConfig {
    /// Hard bound on net position, in lots. Position must stay strictly
    /// inside the open interval after any quote fills.
    #[serde(default = "default_position_limit")]
    pub position_limit: i64,

    /// Nominal quote size per side, in lots.
    #[serde(default = "default_lot_size")]
    pub lot_size: i64,

    /// Minimum price increment, in cents.
    #[serde(default = "default_tick_size")]
    pub tick_size: i64,

    /// Ladder depth to quote at, 1-indexed from best. Quoting behind the
    /// top of book reduces adverse selection.
    #[serde(default = "default_quote_depth")]
    pub quote_depth: usize,

    /// Fraction of `lot_size` added on top of `|position|` when sizing the
    /// inventory-unwind side.
    #[serde(default = "default_unwind_ratio")]
    pub unwind_ratio: f64,
}

impl Default for MakerConfig {
    fn default() -> Self {
        Self {
            position_limit: default_position_limit(),
            lot_size: default_lot_size(),
            tick_size: default_tick_size(),
            quote_depth: default_quote_depth(),
            unwind_ratio: default_unwind_ratio(),
        }
    }
}

impl MakerConfig {
    /// Validate parameter ranges.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.position_limit <= 0 {
            return Err(CoreError::InvalidConfig(format!(
                "position_limit must be positive, got {}",
                self.position_limit
            )));
        }
        if self.lot_size < 2 {
            return Err(CoreError::InvalidVolume(format!(
                "lot_size must be at least 2, got {}",
                self.lot_size
            )));
        }
        if self.tick_size <= 0 {
            return Err(CoreError::InvalidPrice(format!(
                "tick_size must be positive, got {}",
                self.tick_size
            )));
        }
        if self.quote_depth == 0 || self.quote_depth > DEPTH {
            return Err(CoreError::InvalidConfig(format!(
                "quote_depth must be within 1..={DEPTH}, got {}",
                self.quote_depth
            )));
        }
        if !(0.0..=1.0).contains(&self.unwind_ratio) {
            return Err(CoreError::InvalidConfig(format!(
                "unwind_ratio must be within [0, 1], got {}",
                self.unwind_ratio
            )));
        }
        Ok(())
    }

    /// Lots added on top of `|position|` on the unwind side.
    #[must_use]
    pub fn unwind_extra(&self) -> i64 {
        (self.lot_size as f64 * self.unwind_ratio).floor() as i64
    }

    /// Steepness of the logistic damping curve, chosen so the curve
    /// saturates within ~1 lot of its asymptote by `|x| = 1`.
    #[must_use]
    pub fn sigmoid_steepness(&self) -> f64 {
        ((self.lot_size as f64 - 1.0).ln() / 0.7).ceil()
    }

    /// Price for buy hedges: the highest representable price on the tick
    /// grid, guaranteed to cross the hedge instrument's book.
    #[must_use]
    pub fn hedge_buy_price(&self) -> Price {
        MAXIMUM_ASK.round_down_to_tick(self.tick_size)
    }

    /// Price for sell hedges: one tick above the protocol minimum, rounded
    /// to the tick grid.
    #[must_use]
    pub fn hedge_sell_price(&self) -> Price {
        (MINIMUM_BID + Price::new(self.tick_size)).round_down_to_tick(self.tick_size)
    }
}

fn default_position_limit() -> i64 {
    100
}
fn default_lot_size() -> i64 {
    80
}
fn default_tick_size() -> i64 {
    100
}
fn default_quote_depth() -> usize {
    3
}
fn default_unwind_ratio() -> f64 {
    0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MakerConfig::default();
        assert_eq!(config.position_limit, 100);
        assert_eq!(config.lot_size, 80);
        assert_eq!(config.tick_size, 100);
        assert_eq!(config.quote_depth, 3);
        assert!((config.unwind_ratio - 0.5).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_derived_values() {
        let config = MakerConfig::default();
        assert_eq!(config.unwind_extra(), 40);
        // ln(79) / 0.7 ≈ 6.24, ceiled.
        assert!((config.sigmoid_steepness() - 7.0).abs() < f64::EPSILON);
        assert_eq!(config.hedge_buy_price(), Price::new(2_147_483_600));
        assert_eq!(config.hedge_sell_price(), Price::new(100));
    }

    #[test]
    fn test_config_serde_defaults() {
        let toml_str = r#"
position_limit = 50
"#;
        let config: MakerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.position_limit, 50);
        assert_eq!(config.lot_size, 80);
        assert_eq!(config.quote_depth, 3);
    }

    #[test]
    fn test_validate_rejects_bad_depth() {
        let config = MakerConfig {
            quote_depth: 6,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = MakerConfig {
            quote_depth: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_ranges() {
        assert!(MakerConfig {
            position_limit: 0,
            ..Default::default()
        }
        .validate()
        .is_err());
        assert!(MakerConfig {
            lot_size: 1,
            ..Default::default()
        }
        .validate()
        .is_err());
        assert!(MakerConfig {
            tick_size: 0,
            ..Default::default()
        }
        .validate()
        .is_err());
        assert!(MakerConfig {
            unwind_ratio: 1.5,
            ..Default::default()
        }
        .validate()
        .is_err());
    }
}
