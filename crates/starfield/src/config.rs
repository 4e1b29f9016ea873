//! Tuning for the starfield simulation.
//!
//! Defaults reproduce the classic look: stars spawn 100-150 units deep,
//! fly in at 75 units/s and leave a trail three frames long.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while loading a [`StarfieldConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("could not parse starfield config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field holds a value the simulation cannot run with.
    #[error("invalid starfield config `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// How many new stars a field adds per update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnPolicy {
    /// Fixed count per update call. Star density follows the update rate.
    PerUpdate(u32),
    /// Stars per simulated second, independent of the update rate.
    PerSecond(f32),
}

impl Default for SpawnPolicy {
    fn default() -> Self {
        SpawnPolicy::PerUpdate(2)
    }
}

/// Trail shape and colouring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailStyle {
    /// Trail length as a multiple of the last frame's depth change.
    pub length_factor: f32,
    /// Stars closer than this are not drawn.
    pub min_depth: f32,
    /// Depth span over which the hue advances by `hue_turns` turns.
    pub hue_period: f32,
    pub hue_turns: f32,
    /// Hue offset (degrees) between trail head and tip.
    pub hue_offset: f32,
    /// Depth a star must travel from its spawn point to become fully opaque.
    pub fade_depth: f32,
}

impl Default for TrailStyle {
    fn default() -> Self {
        Self {
            length_factor: 3.0,
            min_depth: 1.0,
            hue_period: 150.0,
            hue_turns: 1.75,
            hue_offset: 30.0,
            fade_depth: 50.0,
        }
    }
}

/// Configuration for a starfield, provided by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Fixed update step in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Maximum update steps run for a single host frame.
    pub max_steps_per_frame: u32,
    /// Depth units travelled per second.
    pub speed: f32,
    /// Scale applied after perspective division, stands in for focal length.
    pub focal_scale: f32,
    /// Spawn depth range, `[min, max)`.
    pub spawn_depth_min: f32,
    pub spawn_depth_max: f32,
    pub spawn: SpawnPolicy,
    pub trail: TrailStyle,
    /// Capacity of the per-frame line vertex buffer.
    pub max_line_vertices: usize,
    pub seed: u64,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_steps_per_frame: 10,
            speed: 75.0,
            focal_scale: 60.0,
            spawn_depth_min: 100.0,
            spawn_depth_max: 150.0,
            spawn: SpawnPolicy::default(),
            trail: TrailStyle::default(),
            max_line_vertices: 16384,
            seed: 42,
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason: "must be finite and greater than zero" })
    }
}

impl StarfieldConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field against the ranges the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("fixed_dt", self.fixed_dt)?;
        positive("focal_scale", self.focal_scale)?;
        positive("spawn_depth_min", self.spawn_depth_min)?;
        positive("trail.hue_period", self.trail.hue_period)?;
        positive("trail.fade_depth", self.trail.fade_depth)?;

        if !(self.speed.is_finite() && self.speed >= 0.0) {
            return Err(ConfigError::Invalid { field: "speed", reason: "must be finite and non-negative" });
        }
        if !(self.spawn_depth_max > self.spawn_depth_min) || !self.spawn_depth_max.is_finite() {
            return Err(ConfigError::Invalid {
                field: "spawn_depth_max",
                reason: "must be finite and greater than spawn_depth_min",
            });
        }
        positive("trail.min_depth", self.trail.min_depth)?;
        if !(self.trail.length_factor.is_finite() && self.trail.length_factor >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "trail.length_factor",
                reason: "must be finite and non-negative",
            });
        }
        for (field, value) in [
            ("trail.hue_turns", self.trail.hue_turns),
            ("trail.hue_offset", self.trail.hue_offset),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::Invalid { field, reason: "must be finite" });
            }
        }
        if self.max_steps_per_frame == 0 {
            return Err(ConfigError::Invalid { field: "max_steps_per_frame", reason: "must be at least 1" });
        }
        if self.max_line_vertices < 2 {
            return Err(ConfigError::Invalid { field: "max_line_vertices", reason: "must hold at least one segment" });
        }
        if let SpawnPolicy::PerSecond(rate) = self.spawn {
            if !(rate.is_finite() && rate >= 0.0) {
                return Err(ConfigError::Invalid { field: "spawn", reason: "rate must be finite and non-negative" });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = StarfieldConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.speed, 75.0);
        assert_eq!(config.focal_scale, 60.0);
        assert_eq!(config.spawn, SpawnPolicy::PerUpdate(2));
        assert_eq!(config.trail.length_factor, 3.0);
    }

    #[test]
    fn empty_json_gives_defaults() {
        let config = StarfieldConfig::from_json("{}").unwrap();
        assert_eq!(config, StarfieldConfig::default());
    }

    #[test]
    fn parse_partial_config() {
        let json = r#"{
            "speed": 120.0,
            "spawn": { "per_second": 90.0 },
            "trail": { "length_factor": 5.0 }
        }"#;
        let config = StarfieldConfig::from_json(json).unwrap();
        assert_eq!(config.speed, 120.0);
        assert_eq!(config.spawn, SpawnPolicy::PerSecond(90.0));
        assert_eq!(config.trail.length_factor, 5.0);
        assert_eq!(config.trail.fade_depth, 50.0);
        assert_eq!(config.spawn_depth_min, 100.0);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = StarfieldConfig::from_json("{ speed: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn inverted_spawn_range_is_rejected() {
        let json = r#"{ "spawn_depth_min": 150.0, "spawn_depth_max": 100.0 }"#;
        match StarfieldConfig::from_json(json) {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "spawn_depth_max"),
            other => panic!("expected invalid spawn range, got {:?}", other),
        }
    }

    #[test]
    fn negative_speed_is_rejected() {
        let config = StarfieldConfig { speed: -1.0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_focal_scale_is_rejected() {
        let config = StarfieldConfig { focal_scale: 0.0, ..Default::default() };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("focal_scale"));
    }

    #[test]
    fn non_positive_min_depth_is_rejected() {
        match StarfieldConfig::from_json(r#"{ "trail": { "min_depth": 0.0 } }"#) {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "trail.min_depth"),
            other => panic!("expected invalid min_depth, got {:?}", other),
        }
    }

    #[test]
    fn negative_trail_length_is_rejected() {
        match StarfieldConfig::from_json(r#"{ "trail": { "length_factor": -3.0 } }"#) {
            Err(ConfigError::Invalid { field, .. }) => assert_eq!(field, "trail.length_factor"),
            other => panic!("expected invalid length_factor, got {:?}", other),
        }
        let config = StarfieldConfig {
            trail: TrailStyle { length_factor: 0.0, ..Default::default() },
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn negative_spawn_rate_is_rejected() {
        let config = StarfieldConfig { spawn: SpawnPolicy::PerSecond(-3.0), ..Default::default() };
        assert!(config.validate().is_err());
    }
}
