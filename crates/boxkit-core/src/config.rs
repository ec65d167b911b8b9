//! Box configuration.
//!
//! The configuration is an immutable, validated value: construction of
//! a layout starts from a [`BoxConfig`] that has been checked and
//! normalized to millimeters, so no geometry code ever sees an invalid
//! or inch-denominated dimension.

use serde::{Deserialize, Serialize};

use crate::error::{ParameterError, ParameterResult};
use crate::units::MeasurementSystem;

/// Parameters describing one box to be cut.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxConfig {
    /// Width of the box (x extent of front/back/top/bottom panels)
    pub width: f64,
    /// Height of the box (y extent of front/back/left/right panels)
    pub height: f64,
    /// Depth of the box (the remaining extent)
    pub depth: f64,
    /// Material thickness
    pub thickness: f64,
    /// Desired notch width; adapted per edge to fit its exact length
    pub notch_width: f64,
    /// Width of material removed by the cutting beam (>= 0)
    pub kerf: f64,
    /// Gap between panels in layout space (>= 0)
    pub padding: f64,
    /// Global preference: center notch of an edge faces out
    pub center_out: bool,
    /// When true, width/height/depth measure the assembled outside and
    /// each panel is shrunk by twice the material thickness
    pub outside_dimensions: bool,
    /// Measurement system the values above are expressed in
    pub units: MeasurementSystem,
}

impl Default for BoxConfig {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 60.0,
            depth: 40.0,
            thickness: 3.0,
            notch_width: 10.0,
            kerf: 0.0,
            padding: 5.0,
            center_out: false,
            outside_dimensions: false,
            units: MeasurementSystem::Metric,
        }
    }
}

impl BoxConfig {
    /// Validate all parameters without changing them.
    pub fn validate(&self) -> ParameterResult<()> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("depth", self.depth),
            ("thickness", self.thickness),
            ("notch_width", self.notch_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParameterError::InvalidDimensions(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        for (name, value) in [("kerf", self.kerf), ("padding", self.padding)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ParameterError::OutOfRange {
                    name: name.to_string(),
                    value,
                    min: 0.0,
                    max: f64::INFINITY,
                });
            }
        }
        Ok(())
    }

    /// Validate and return an equivalent configuration in millimeters
    /// with inner panel dimensions.
    ///
    /// Inch values are converted, and when `outside_dimensions` is set
    /// every box dimension is reduced by `2 * thickness` so that the
    /// assembled outside matches the requested size.
    pub fn normalized(&self) -> ParameterResult<BoxConfig> {
        self.validate()?;

        let u = self.units;
        let mut config = BoxConfig {
            width: u.to_mm(self.width),
            height: u.to_mm(self.height),
            depth: u.to_mm(self.depth),
            thickness: u.to_mm(self.thickness),
            notch_width: u.to_mm(self.notch_width),
            kerf: u.to_mm(self.kerf),
            padding: u.to_mm(self.padding),
            units: MeasurementSystem::Metric,
            outside_dimensions: false,
            center_out: self.center_out,
        };

        if self.outside_dimensions {
            let shrink = 2.0 * config.thickness;
            config.width -= shrink;
            config.height -= shrink;
            config.depth -= shrink;
            if config.width <= 0.0 || config.height <= 0.0 || config.depth <= 0.0 {
                return Err(ParameterError::InvalidDimensions(format!(
                    "outside dimensions leave no material after subtracting 2 x thickness ({})",
                    shrink
                )));
            }
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(BoxConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let config = BoxConfig {
            width: 0.0,
            ..BoxConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ParameterError::InvalidDimensions(_))
        ));

        let config = BoxConfig {
            thickness: -3.0,
            ..BoxConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_kerf() {
        let config = BoxConfig {
            kerf: -0.1,
            ..BoxConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ParameterError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_normalized_converts_inches() {
        let config = BoxConfig {
            width: 4.0,
            height: 3.0,
            depth: 2.0,
            thickness: 0.25,
            notch_width: 0.5,
            units: MeasurementSystem::Imperial,
            ..BoxConfig::default()
        };
        let mm = config.normalized().unwrap();
        assert_eq!(mm.units, MeasurementSystem::Metric);
        assert!((mm.width - 101.6).abs() < 1e-9);
        assert!((mm.thickness - 6.35).abs() < 1e-9);
    }

    #[test]
    fn test_outside_dimensions_shrink_panels() {
        let config = BoxConfig {
            width: 100.0,
            height: 60.0,
            depth: 40.0,
            thickness: 3.0,
            outside_dimensions: true,
            ..BoxConfig::default()
        };
        let inner = config.normalized().unwrap();
        assert_eq!(inner.width, 94.0);
        assert_eq!(inner.height, 54.0);
        assert_eq!(inner.depth, 34.0);
        assert!(!inner.outside_dimensions);

        let too_thin = BoxConfig {
            depth: 5.0,
            thickness: 3.0,
            outside_dimensions: true,
            ..BoxConfig::default()
        };
        assert!(too_thin.normalized().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let config = BoxConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: BoxConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.width, config.width);
        assert_eq!(back.units, config.units);
    }
}
