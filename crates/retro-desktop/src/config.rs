//! Desktop configuration
//!
//! Loaded from an optional JSON block on the page. Every field has a default,
//! so `{}` is a valid configuration.

use serde::{Deserialize, Serialize};
use crate::error::DesktopError;

/// How a dragged element is bounded
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionPolicy {
    /// Keep the element fully inside the viewport
    #[default]
    Clamped,
    /// Allow the element to leave the viewport
    Free,
}

/// Counter discipline for window stacking
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "lowercase")]
pub enum StackingPolicy {
    /// Monotonic increment starting at `start`
    Unbounded { start: i32 },
    /// Values cycle through `[min, max]`
    Cyclic { min: i32, max: i32 },
}

impl Default for StackingPolicy {
    fn default() -> Self {
        StackingPolicy::Unbounded { start: 1 }
    }
}

/// Release momentum settings
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MomentumConfig {
    /// Whether a release with velocity keeps the element moving
    pub enabled: bool,
    /// Per-frame velocity multiplier, in `(0, 1)`
    pub friction: f32,
    /// Coasting stops once both velocity components fall below this (px/frame)
    pub stop_speed: f32,
    /// A release later than this after the last move does not fling (ms)
    pub release_window_ms: f64,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            friction: 0.9,
            stop_speed: 0.5,
            release_window_ms: 20.0,
        }
    }
}

/// Drag behaviour shared by every controller
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DragConfig {
    pub position_policy: PositionPolicy,
    pub momentum: MomentumConfig,
    /// Touch travel (px) before page scrolling is suppressed
    pub touch_slop: f32,
    /// Element ids that count as interactive controls inside a handle
    pub control_ids: Vec<String>,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            position_policy: PositionPolicy::Clamped,
            momentum: MomentumConfig::default(),
            touch_slop: 5.0,
            control_ids: [
                "close-button",
                "close-button-about",
                "about-OK",
                "minimize-btn",
                "media-control-button",
                "dropdown-button",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

/// Tag names that are always interactive controls
const CONTROL_TAGS: [&str; 4] = ["button", "input", "textarea", "select"];

impl DragConfig {
    /// Whether an event target with this tag name and id is an interactive
    /// control that must not start a drag
    pub fn is_control(&self, tag_name: &str, id: &str) -> bool {
        CONTROL_TAGS.iter().any(|tag| tag.eq_ignore_ascii_case(tag_name))
            || (!id.is_empty() && self.control_ids.iter().any(|c| c == id))
    }
}

/// Content endpoints and caching
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentConfig {
    /// Static content document
    pub url: String,
    /// Blog posting endpoint (None disables posting)
    pub post_url: Option<String>,
    /// How long fetched content stays fresh
    pub cache_ttl_ms: f64,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            url: "./data/content.json".to_string(),
            post_url: None,
            cache_ttl_ms: 5.0 * 60.0 * 1000.0,
        }
    }
}

/// Top-level configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DesktopConfig {
    pub drag: DragConfig,
    pub stacking: StackingPolicy,
    pub content: ContentConfig,
}

impl DesktopConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, DesktopError> {
        let config: DesktopConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<(), DesktopError> {
        let momentum = &self.drag.momentum;
        if !(momentum.friction > 0.0 && momentum.friction < 1.0) {
            return Err(DesktopError::InvalidConfig(format!(
                "friction must be in (0, 1), got {}",
                momentum.friction
            )));
        }
        if momentum.stop_speed <= 0.0 {
            return Err(DesktopError::InvalidConfig(format!(
                "stopSpeed must be positive, got {}",
                momentum.stop_speed
            )));
        }
        if momentum.release_window_ms < 0.0 {
            return Err(DesktopError::InvalidConfig(format!(
                "releaseWindowMs must not be negative, got {}",
                momentum.release_window_ms
            )));
        }
        if self.drag.touch_slop < 0.0 {
            return Err(DesktopError::InvalidConfig(format!(
                "touchSlop must not be negative, got {}",
                self.drag.touch_slop
            )));
        }
        match self.stacking {
            StackingPolicy::Unbounded { start } if start < 1 => Err(DesktopError::InvalidConfig(
                format!("stacking start must be >= 1, got {}", start),
            )),
            StackingPolicy::Cyclic { min, max } if min < 1 || min >= max => {
                Err(DesktopError::InvalidConfig(format!(
                    "cyclic stacking needs 1 <= min < max, got [{}, {}]",
                    min, max
                )))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = DesktopConfig::from_json("{}").unwrap();
        assert_eq!(config, DesktopConfig::default());
        assert_eq!(config.drag.position_policy, PositionPolicy::Clamped);
        assert_eq!(config.stacking, StackingPolicy::Unbounded { start: 1 });
        assert!((config.drag.touch_slop - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_partial_json() {
        let config = DesktopConfig::from_json(
            r#"{
                "drag": { "positionPolicy": "free", "momentum": { "friction": 0.8 } },
                "stacking": { "policy": "cyclic", "min": 1000, "max": 1010 }
            }"#,
        )
        .unwrap();

        assert_eq!(config.drag.position_policy, PositionPolicy::Free);
        assert!(config.drag.momentum.enabled);
        assert!((config.drag.momentum.friction - 0.8).abs() < 0.001);
        assert_eq!(config.stacking, StackingPolicy::Cyclic { min: 1000, max: 1010 });
        assert!(config.drag.control_ids.iter().any(|id| id == "close-button"));
    }

    #[test]
    fn test_rejects_friction_out_of_range() {
        let err = DesktopConfig::from_json(r#"{ "drag": { "momentum": { "friction": 1.0 } } }"#)
            .unwrap_err();
        assert!(matches!(err, DesktopError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_inverted_cyclic_range() {
        let err = DesktopConfig::from_json(r#"{ "stacking": { "policy": "cyclic", "min": 5, "max": 5 } }"#)
            .unwrap_err();
        assert!(matches!(err, DesktopError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_zero_start() {
        let err = DesktopConfig::from_json(r#"{ "stacking": { "policy": "unbounded", "start": 0 } }"#)
            .unwrap_err();
        assert!(matches!(err, DesktopError::InvalidConfig(_)));
    }

    #[test]
    fn test_control_detection() {
        let drag = DragConfig::default();
        assert!(drag.is_control("BUTTON", ""));
        assert!(drag.is_control("select", "anything"));
        assert!(drag.is_control("DIV", "close-button"));
        assert!(drag.is_control("IMG", "media-control-button"));
        assert!(!drag.is_control("DIV", "header"));
        assert!(!drag.is_control("SPAN", ""));
    }

    #[test]
    fn test_malformed_json() {
        let err = DesktopConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, DesktopError::Config(_)));
    }
}
