#![allow(dead_code)]
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const EPS: f32 = 1e-3;

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() <= EPS * b.abs().max(1.0)
}

pub fn approx_vec(a: Vec2, b: Vec2) -> bool {
    approx(a.x, b.x) && approx(a.y, b.y)
}
