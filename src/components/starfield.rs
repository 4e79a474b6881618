//! Twinkling background stars.

use std::f64::consts::TAU;

use rand::Rng;
use web_sys::CanvasRenderingContext2d;

/// Alpha around which every star oscillates.
pub const TWINKLE_BASE: f64 = 0.3;
/// Half the peak-to-peak alpha swing.
pub const TWINKLE_AMPLITUDE: f64 = 0.4;
const MIN_SPEED: f64 = 0.01;
const MAX_SPEED: f64 = 0.03;
const MIN_SIZE: f64 = 1.0;
const MAX_SIZE: f64 = 3.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Star {
	pub x: f64,
	pub y: f64,
	pub size: f64,
	pub phase: f64,
	pub speed: f64,
}

impl Star {
	/// Unclamped display alpha; may dip slightly below zero.
	pub fn alpha(&self) -> f64 {
		TWINKLE_BASE + TWINKLE_AMPLITUDE * self.phase.sin()
	}
}

#[derive(Clone, Debug, Default)]
pub struct StarField {
	stars: Vec<Star>,
}

impl StarField {
	/// Scatter `count` stars uniformly over `width` × `height`.
	pub fn initialize<R: Rng + ?Sized>(count: usize, width: f64, height: f64, rng: &mut R) -> Self {
		let stars = (0..count)
			.map(|_| Star {
				x: rng.random::<f64>() * width,
				y: rng.random::<f64>() * height,
				size: rng.random_range(MIN_SIZE..MAX_SIZE),
				phase: rng.random::<f64>() * TAU,
				speed: rng.random_range(MIN_SPEED..MAX_SPEED),
			})
			.collect();
		Self { stars }
	}

	pub fn tick(&mut self) {
		for star in &mut self.stars {
			star.phase += star.speed;
		}
	}

	pub fn draw(&self, ctx: &CanvasRenderingContext2d) {
		ctx.set_fill_style_str("#ffffff");
		for star in &self.stars {
			let alpha = star.alpha().clamp(0.0, 1.0);
			if alpha <= 0.0 {
				continue;
			}
			ctx.set_global_alpha(alpha);
			ctx.begin_path();
			let _ = ctx.arc(star.x, star.y, star.size, 0.0, TAU);
			ctx.fill();
		}
		ctx.set_global_alpha(1.0);
	}
}
