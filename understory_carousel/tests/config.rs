// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading [`CarouselConfig`] from JSON.

#![cfg(feature = "serde")]

use understory_carousel::{CarouselConfig, ConfigError, Easing};

#[test]
fn partial_json_keeps_defaults() {
    let config: CarouselConfig =
        serde_json::from_str(r#"{ "autoAdvanceIntervalMs": 4000, "dragThresholdPx": 40.0 }"#)
            .unwrap();
    assert_eq!(config.auto_advance_interval_ms, 4_000);
    assert_eq!(config.drag_threshold_px, 40.0);
    assert_eq!(config.transition_duration_ms, 600);
    assert_eq!(config.easing, Easing::EASE_IN_OUT);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn easing_round_trips_through_json() {
    let config = CarouselConfig::default().with_easing(Easing::Linear);
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains(r#""easing":"linear""#), "{json}");
    let back: CarouselConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn loaded_config_is_still_validated() {
    let config: CarouselConfig =
        serde_json::from_str(r#"{ "visibilityThreshold": 1.5 }"#).unwrap();
    assert_eq!(
        config.validate(),
        Err(ConfigError::InvalidVisibilityThreshold(1.5))
    );
}
