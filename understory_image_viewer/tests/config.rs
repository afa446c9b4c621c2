// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading `ViewerConfig` from TOML with the `serde` feature.

use kurbo::Size;
use understory_image_viewer::{ConfigError, ImageViewer, Transform, ViewerConfig};

#[test]
fn partial_toml_fills_defaults() {
    let config: ViewerConfig = toml::from_str(
        r#"
        max_zoom_scale = 5.0
        settle_on_pinch_end = true
        "#,
    )
    .expect("valid TOML");

    assert_eq!(config.max_zoom_scale, 5.0);
    assert!(config.settle_on_pinch_end);
    assert_eq!(config.zoom_step, ViewerConfig::default().zoom_step);
    assert_eq!(config.timing_duration_ms, 300);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn empty_toml_is_default() {
    let config: ViewerConfig = toml::from_str("").expect("valid TOML");
    assert_eq!(config, ViewerConfig::default());
}

#[test]
fn loaded_config_is_validated_on_mount() {
    let config: ViewerConfig = toml::from_str("decay_deceleration = 1.5").expect("valid TOML");
    let err = ImageViewer::with_config(
        config,
        "a.png",
        Size::new(400.0, 800.0),
        Transform::IDENTITY,
        (),
    )
    .unwrap_err();
    assert_eq!(err, ConfigError::InvalidDeceleration(1.5));
    assert_eq!(
        err.to_string(),
        "invalid decay deceleration: 1.5 (must be in (0, 1))"
    );
}

#[test]
fn config_round_trips_through_toml() {
    let config = ViewerConfig {
        max_zoom_scale: 4.0,
        zoom_step: 0.25,
        ..ViewerConfig::default()
    };
    let text = toml::to_string(&config).expect("serializable");
    let back: ViewerConfig = toml::from_str(&text).expect("valid TOML");
    assert_eq!(back, config);
}
