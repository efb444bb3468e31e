// Copyright 2026 the Orgchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration.

use orgchart_layout::NodeMetrics;
use serde::{Deserialize, Serialize};

/// Construction-time settings.
///
/// Every field has a default, so a partial JSON object is enough:
///
/// ```rust
/// use orgchart::ChartConfig;
///
/// let config: ChartConfig =
///     serde_json::from_str(r#"{ "nodeWidth": 180, "defaultExpandDepth": 2 }"#).unwrap();
/// assert_eq!(config.node_width, 180.0);
/// assert_eq!(config.node_height, 100.0);
/// assert_eq!(config.default_expand_depth, Some(2));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartConfig {
    /// Card width in canvas units.
    pub node_width: f64,
    /// Card height in canvas units.
    pub node_height: f64,
    /// Horizontal gap between sibling cards.
    pub node_spacing_x: f64,
    /// Vertical gap between rows.
    pub node_spacing_y: f64,
    /// On the first render, nodes at this depth or deeper start collapsed.
    /// `None` expands everything.
    pub default_expand_depth: Option<usize>,
    /// Length of node and link transitions.
    pub animation_duration_ms: u64,
    /// Length of fit, reset and center moves.
    pub camera_duration_ms: u64,
    /// Culling margin in screen pixels while only the view changes.
    pub viewport_buffer: f64,
    /// Culling margin in screen pixels while nodes animate after a layout change.
    pub layout_buffer: f64,
    /// Smallest zoom factor.
    pub min_scale: f64,
    /// Largest zoom factor.
    pub max_scale: f64,
    /// Gap above the root after a reset.
    pub top_margin: f64,
    /// Pointer travel, in screen pixels, beyond which a press is not a click.
    pub click_distance: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        let metrics = NodeMetrics::default();
        Self {
            node_width: metrics.width,
            node_height: metrics.height,
            node_spacing_x: metrics.spacing_x,
            node_spacing_y: metrics.spacing_y,
            default_expand_depth: None,
            animation_duration_ms: 400,
            camera_duration_ms: 750,
            viewport_buffer: 300.0,
            layout_buffer: 600.0,
            min_scale: 0.1,
            max_scale: 2.0,
            top_margin: 50.0,
            click_distance: 5.0,
        }
    }
}

impl ChartConfig {
    /// Card dimensions for the layout engine.
    #[must_use]
    pub fn metrics(&self) -> NodeMetrics {
        NodeMetrics {
            width: self.node_width,
            height: self.node_height,
            spacing_x: self.node_spacing_x,
            spacing_y: self.node_spacing_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_camel_case() {
        let json = serde_json::to_value(ChartConfig::default()).unwrap();
        assert_eq!(json["nodeSpacingX"], 50.0);
        assert_eq!(json["animationDurationMs"], 400);
        assert!(json["defaultExpandDepth"].is_null());
    }

    #[test]
    fn empty_object_is_the_default() {
        let config: ChartConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ChartConfig::default());
        assert_eq!(config.metrics(), NodeMetrics::default());
    }
}
