// Host-side tests for wave layers and the wave stack.

mod common;

use common::*;
use glam::Vec2;
use sky_core::{
    DrawOp, RecordingSurface, Rgba, SceneConfig, SceneError, WaveLayer, WaveStack,
    DEFAULT_WAVE_COLORS, WAVE_BASELINE_OFFSET, WAVE_MAX_AMPLITUDE,
};

const TEAL: Rgba = Rgba::new(0, 230, 230, 0.2);

#[test]
fn layer_rejects_fewer_than_two_points() {
    assert_eq!(
        WaveLayer::new(0, 1, TEAL).unwrap_err(),
        SceneError::TooFewPoints(1)
    );
    assert_eq!(
        WaveLayer::new(0, 0, TEAL).unwrap_err(),
        SceneError::TooFewPoints(0)
    );
    assert!(WaveLayer::new(0, 2, TEAL).is_ok());
}

#[test]
fn three_points_over_one_hundred_pixels() {
    let mut layer = WaveLayer::new(0, 3, TEAL).unwrap();
    layer.resize(100.0, 200.0, &mut rng(1));
    assert!(approx(layer.point_spacing, 50.0));
    let xs: Vec<f32> = layer.points.iter().map(|p| p.anchor.x).collect();
    assert_eq!(xs.len(), 3);
    assert!(approx(xs[0], 0.0));
    assert!(approx(xs[1], 50.0));
    assert!(approx(xs[2], 100.0));
}

#[test]
fn rebuilt_points_span_the_width_left_to_right() {
    let mut r = rng(7);
    for count in 2..40 {
        for &width in &[37.0_f32, 800.0, 1919.0] {
            let mut layer = WaveLayer::new(2, count, TEAL).unwrap();
            layer.resize(width, 256.0, &mut r);
            assert_eq!(layer.points.len(), count);
            assert!(approx(layer.points[0].anchor.x, 0.0));
            assert!(approx(layer.points[count - 1].anchor.x, width));
            for pair in layer.points.windows(2) {
                assert!(pair[1].anchor.x > pair[0].anchor.x);
            }
        }
    }
}

#[test]
fn points_share_the_baseline_and_bounded_amplitude() {
    let mut layer = WaveLayer::new(3, 12, TEAL).unwrap();
    layer.resize(800.0, 200.0, &mut rng(3));
    assert!(approx(layer.anchor_y, 200.0 - WAVE_BASELINE_OFFSET));
    for (i, p) in layer.points.iter().enumerate() {
        assert_eq!(p.anchor.y, layer.anchor_y);
        assert!(p.amplitude >= 0.0 && p.amplitude < WAVE_MAX_AMPLITUDE);
        // decorrelated per point and per layer
        assert_eq!(p.phase_seed, (3 + i) as f32);
    }
}

#[test]
fn resize_with_same_size_keeps_anchors() {
    let mut layer = WaveLayer::new(1, 9, TEAL).unwrap();
    let mut r = rng(11);
    layer.resize(640.0, 180.0, &mut r);
    let first: Vec<Vec2> = layer.points.iter().map(|p| p.anchor).collect();
    layer.resize(640.0, 180.0, &mut r);
    let second: Vec<Vec2> = layer.points.iter().map(|p| p.anchor).collect();
    assert_eq!(first, second);
}

#[test]
fn layer_draws_one_smoothed_closed_band() {
    let mut layer = WaveLayer::new(0, 3, TEAL).unwrap();
    layer.resize(100.0, 200.0, &mut rng(5));
    let mut surface = RecordingSurface::new(50.0, 100.0);
    layer.draw(&mut surface);

    let p: Vec<Vec2> = layer.points.iter().map(|p| p.current).collect();
    let expected = vec![
        DrawOp::BeginPath,
        DrawOp::SetFill(TEAL),
        DrawOp::MoveTo(p[0]),
        DrawOp::QuadraticCurveTo(p[0], (p[0] + p[1]) * 0.5),
        DrawOp::QuadraticCurveTo(p[1], (p[1] + p[2]) * 0.5),
        DrawOp::LineTo(p[2]),
        DrawOp::LineTo(Vec2::new(100.0, 200.0)),
        DrawOp::LineTo(Vec2::new(p[0].x, 200.0)),
        DrawOp::ClosePath,
        DrawOp::Fill,
    ];
    assert_eq!(surface.ops, expected);
}

#[test]
fn layer_draw_advances_points() {
    let mut layer = WaveLayer::new(0, 4, TEAL).unwrap();
    layer.resize(300.0, 200.0, &mut rng(9));
    let mut surface = RecordingSurface::default();
    let mut seen = Vec::new();
    for _ in 0..5 {
        layer.draw(&mut surface);
        seen.push(layer.points[1].current.y);
    }
    if layer.points[1].amplitude > 1e-3 {
        assert!(seen.windows(2).any(|w| w[0] != w[1]));
    }
}

#[test]
fn layer_draw_before_resize_is_noop() {
    let mut layer = WaveLayer::new(0, 5, TEAL).unwrap();
    let mut surface = RecordingSurface::default();
    layer.draw(&mut surface);
    assert!(surface.ops.is_empty());
}

#[test]
fn stack_derives_point_count_from_css_width() {
    let config = SceneConfig::default();
    let stack = WaveStack::new(&config, 400.0).unwrap();
    assert_eq!(stack.len(), 5);
    for (i, layer) in stack.layers.iter().enumerate() {
        assert_eq!(layer.layer_index, i);
        assert_eq!(layer.point_count, 12);
        assert_eq!(layer.fill, DEFAULT_WAVE_COLORS[i]);
    }
}

#[test]
fn stack_point_count_has_a_floor() {
    let config = SceneConfig::default();
    assert_eq!(config.wave_point_count(0.0), 2);
    assert_eq!(config.wave_point_count(10.0), 2);
    assert_eq!(config.wave_point_count(f32::NAN), 2);
    assert_eq!(config.wave_point_count(1000.0), 30);
    let stack = WaveStack::new(&config, 3.0).unwrap();
    assert!(stack.layers.iter().all(|l| l.point_count == 2));
}

#[test]
fn stack_rejects_empty_palette() {
    let config = SceneConfig {
        wave_colors: Vec::new(),
        ..Default::default()
    };
    assert_eq!(
        WaveStack::new(&config, 400.0).unwrap_err(),
        SceneError::EmptyPalette
    );
}

#[test]
fn stack_draws_every_layer_back_to_front_each_call() {
    let config = SceneConfig::default();
    let mut stack = WaveStack::new(&config, 400.0).unwrap();
    stack.resize(800.0, 200.0, &mut rng(2));
    let mut surface = RecordingSurface::default();
    for _ in 0..3 {
        stack.draw(&mut surface);
        assert_eq!(surface.fills(), DEFAULT_WAVE_COLORS.to_vec());
        let fills = surface
            .take_ops()
            .into_iter()
            .filter(|op| *op == DrawOp::Fill)
            .count();
        assert_eq!(fills, 5);
    }
}

#[test]
fn stack_resize_reaches_every_layer() {
    let config = SceneConfig::default();
    let mut stack = WaveStack::new(&config, 400.0).unwrap();
    stack.resize(800.0, 200.0, &mut rng(4));
    for layer in &stack.layers {
        assert_eq!(layer.viewport, Vec2::new(800.0, 200.0));
        assert_eq!(layer.points.len(), 12);
    }
}

#[test]
fn css_color_strings() {
    assert_eq!(DEFAULT_WAVE_COLORS[0].to_string(), "rgba(0,230,230,0.2)");
    assert_eq!(DEFAULT_WAVE_COLORS[4].to_string(), "rgba(0,72,130,0.2)");
    assert_eq!(Rgba::new(0, 15, 255, 1.0).to_string(), "rgba(0,15,255,1)");
}
