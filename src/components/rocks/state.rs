use std::f64::consts::TAU;

use log::debug;
use rand::Rng;

use crate::components::starfield::StarField;

/// Per-tick multiplier applied to linear velocity.
pub const LINEAR_DECAY: f64 = 0.98;
/// Per-tick multiplier applied to angular velocity.
pub const ANGULAR_DECAY: f64 = 0.99;
/// Drag vectors longer than this are shortened before the impulse is computed.
pub const MAX_DRAG_DISTANCE: f64 = 100.0;
pub const FORCE_PER_PIXEL: f64 = 0.003;
pub const MAX_FORCE: f64 = 0.3;
/// Released bodies drift instead of carrying the full drag speed.
pub const RELEASE_SCALE: f64 = 0.5;
pub const SPIN_PER_FORCE: f64 = 0.1;
/// Inset region, in percent of each axis, a body may occupy.
pub const MIN_PERCENT: f64 = 2.0;
pub const MAX_PERCENT: f64 = 98.0;

const OUTLINE_POINTS: usize = 9;
const MIN_SIZE: f64 = 30.0;
const MAX_SIZE: f64 = 70.0;
const INITIAL_DRIFT: f64 = 0.05;
const INITIAL_SPIN: f64 = 0.01;

/// A floating body. Position and velocity are in percent of the viewport,
/// size in pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Rock {
	pub id: usize,
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub rotation: f64,
	pub spin: f64,
	pub size: f64,
	/// Radius factors of the irregular outline, one per vertex.
	pub outline: Vec<f64>,
}

impl Rock {
	pub fn radius(&self) -> f64 {
		self.size / 2.0
	}

	fn integrate(&mut self) {
		self.x = (self.x + self.vx).clamp(MIN_PERCENT, MAX_PERCENT);
		self.y = (self.y + self.vy).clamp(MIN_PERCENT, MAX_PERCENT);
		self.rotation = (self.rotation + self.spin) % TAU;
		self.vx *= LINEAR_DECAY;
		self.vy *= LINEAR_DECAY;
		self.spin *= ANGULAR_DECAY;
	}
}

/// Velocity and spin handed to a body released after a drag of `(dx, dy)`
/// pixels. The drag distance and the resulting force are both capped.
pub fn release_impulse(dx: f64, dy: f64) -> (f64, f64, f64) {
	let distance = dx.hypot(dy);
	if distance == 0.0 {
		return (0.0, 0.0, 0.0);
	}
	let (nx, ny) = (dx / distance, dy / distance);
	let force = (distance.min(MAX_DRAG_DISTANCE) * FORCE_PER_PIXEL).min(MAX_FORCE);
	(
		nx * force * RELEASE_SCALE,
		ny * force * RELEASE_SCALE,
		nx * force * SPIN_PER_FORCE,
	)
}

/// The single body currently held by the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drag {
	pub rock: usize,
	pub start: (f64, f64),
	pub current: (f64, f64),
}

impl Drag {
	pub fn vector(&self) -> (f64, f64) {
		(self.current.0 - self.start.0, self.current.1 - self.start.1)
	}

	/// Drag vector shortened to the maximum drag distance.
	pub fn clamped_vector(&self) -> (f64, f64) {
		let (dx, dy) = self.vector();
		let distance = dx.hypot(dy);
		if distance <= MAX_DRAG_DISTANCE {
			(dx, dy)
		} else {
			let scale = MAX_DRAG_DISTANCE / distance;
			(dx * scale, dy * scale)
		}
	}
}

/// Rocks drifting over a twinkling backdrop.
pub struct RockField {
	rocks: Vec<Rock>,
	stars: StarField,
	drag: Option<Drag>,
	pub width: f64,
	pub height: f64,
}

impl RockField {
	pub fn new(rocks: Vec<Rock>, stars: StarField, width: f64, height: f64) -> Self {
		Self {
			rocks,
			stars,
			drag: None,
			width,
			height,
		}
	}

	/// Scatter `count` rocks with a gentle initial drift.
	pub fn scatter<R: Rng + ?Sized>(
		count: usize,
		stars: StarField,
		width: f64,
		height: f64,
		rng: &mut R,
	) -> Self {
		let rocks = (0..count)
			.map(|id| Rock {
				id,
				x: rng.random_range(10.0..90.0),
				y: rng.random_range(10.0..90.0),
				vx: rng.random_range(-INITIAL_DRIFT..INITIAL_DRIFT),
				vy: rng.random_range(-INITIAL_DRIFT..INITIAL_DRIFT),
				rotation: rng.random::<f64>() * TAU,
				spin: rng.random_range(-INITIAL_SPIN..INITIAL_SPIN),
				size: rng.random_range(MIN_SIZE..MAX_SIZE),
				outline: (0..OUTLINE_POINTS).map(|_| rng.random_range(0.75..1.0)).collect(),
			})
			.collect();
		Self::new(rocks, stars, width, height)
	}

	pub fn rocks(&self) -> &[Rock] {
		&self.rocks
	}

	pub fn stars(&self) -> &StarField {
		&self.stars
	}

	pub fn drag(&self) -> Option<&Drag> {
		self.drag.as_ref()
	}

	/// Pixel centre of `rock` on the current viewport.
	pub fn center(&self, rock: &Rock) -> (f64, f64) {
		(rock.x / 100.0 * self.width, rock.y / 100.0 * self.height)
	}

	/// Topmost rock under a pixel position.
	pub fn rock_at(&self, px: f64, py: f64) -> Option<usize> {
		self.rocks.iter().enumerate().rev().find_map(|(i, rock)| {
			let (cx, cy) = self.center(rock);
			((px - cx).hypot(py - cy) <= rock.radius()).then_some(i)
		})
	}

	/// Grab the rock under the pointer. Returns whether a drag started.
	pub fn pointer_down(&mut self, px: f64, py: f64) -> bool {
		if self.drag.is_some() {
			return false;
		}
		let Some(rock) = self.rock_at(px, py) else {
			return false;
		};
		self.drag = Some(Drag {
			rock,
			start: (px, py),
			current: (px, py),
		});
		true
	}

	pub fn pointer_move(&mut self, px: f64, py: f64) {
		if let Some(drag) = self.drag.as_mut() {
			drag.current = (px, py);
		}
	}

	/// Release the held rock, replacing its velocity and spin with the
	/// impulse of the drag. Returns the released rock's index.
	pub fn pointer_up(&mut self) -> Option<usize> {
		let drag = self.drag.take()?;
		let (dx, dy) = drag.vector();
		let (vx, vy, spin) = release_impulse(dx, dy);
		let rock = self.rocks.get_mut(drag.rock)?;
		rock.vx = vx;
		rock.vy = vy;
		rock.spin = spin;
		debug!("rock {} released with velocity ({vx:.3}, {vy:.3})", rock.id);
		Some(drag.rock)
	}

	/// Leaving the canvas releases like a pointer-up.
	pub fn pointer_leave(&mut self) -> Option<usize> {
		self.pointer_up()
	}

	/// Integrate every rock except the held one.
	pub fn tick(&mut self) {
		self.stars.tick();
		let held = self.drag.map(|d| d.rock);
		for (i, rock) in self.rocks.iter_mut().enumerate() {
			if Some(i) != held {
				rock.integrate();
			}
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Segment from the held rock's centre along the clamped drag vector.
	pub fn aim_line(&self) -> Option<((f64, f64), (f64, f64))> {
		let drag = self.drag.as_ref()?;
		let rock = self.rocks.get(drag.rock)?;
		let (cx, cy) = self.center(rock);
		let (dx, dy) = drag.clamped_vector();
		Some(((cx, cy), (cx + dx, cy + dy)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rock(id: usize, x: f64, y: f64) -> Rock {
		Rock {
			id,
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			rotation: 0.0,
			spin: 0.0,
			size: 40.0,
			outline: vec![1.0; OUTLINE_POINTS],
		}
	}

	fn field(rocks: Vec<Rock>) -> RockField {
		RockField::new(rocks, StarField::default(), 1000.0, 500.0)
	}

	#[test]
	fn zero_drag_gives_zero_velocity() {
		assert_eq!(release_impulse(0.0, 0.0), (0.0, 0.0, 0.0));

		let mut field = field(vec![Rock {
			vx: 0.2,
			vy: -0.1,
			spin: 0.05,
			..rock(0, 50.0, 50.0)
		}]);
		assert!(field.pointer_down(500.0, 250.0));
		assert_eq!(field.pointer_up(), Some(0));
		let r = &field.rocks()[0];
		assert_eq!((r.vx, r.vy, r.spin), (0.0, 0.0, 0.0));
	}

	#[test]
	fn drag_beyond_cap_matches_cap() {
		let at_cap = release_impulse(60.0, 80.0);
		let beyond = release_impulse(600.0, 800.0);
		assert!((at_cap.0 - beyond.0).abs() < 1e-12);
		assert!((at_cap.1 - beyond.1).abs() < 1e-12);
		assert!((at_cap.2 - beyond.2).abs() < 1e-12);
	}

	#[test]
	fn impulse_scales_below_cap() {
		let (vx, vy, spin) = release_impulse(50.0, 0.0);
		let force = 50.0 * FORCE_PER_PIXEL;
		assert!((vx - force * RELEASE_SCALE).abs() < 1e-12);
		assert_eq!(vy, 0.0);
		assert!((spin - force * SPIN_PER_FORCE).abs() < 1e-12);

		let (_, vy, _) = release_impulse(0.0, -30.0);
		assert!(vy < 0.0);
	}

	#[test]
	fn velocity_decays_monotonically() {
		let mut field = field(vec![Rock {
			vx: 0.3,
			vy: -0.2,
			spin: 0.04,
			..rock(0, 50.0, 50.0)
		}]);
		let mut last = (0.3f64.hypot(0.2), 0.04);
		for _ in 0..500 {
			field.tick();
			let r = &field.rocks()[0];
			let speed = r.vx.hypot(r.vy);
			assert!(speed < last.0);
			assert!(r.spin.abs() < last.1);
			last = (speed, r.spin.abs());
		}
	}

	#[test]
	fn bounds_clamp_position_but_keep_velocity() {
		let mut field = field(vec![Rock {
			vx: 5.0,
			vy: -5.0,
			..rock(0, 97.0, 3.0)
		}]);
		field.tick();
		let r = &field.rocks()[0];
		assert_eq!(r.x, MAX_PERCENT);
		assert_eq!(r.y, MIN_PERCENT);
		assert!((r.vx - 5.0 * LINEAR_DECAY).abs() < 1e-12);
		assert!((r.vy + 5.0 * LINEAR_DECAY).abs() < 1e-12);
	}

	#[test]
	fn held_rock_is_not_integrated() {
		let mut field = field(vec![
			Rock {
				vx: 1.0,
				..rock(0, 20.0, 20.0)
			},
			Rock {
				vx: 1.0,
				..rock(1, 60.0, 60.0)
			},
		]);
		assert!(field.pointer_down(200.0, 100.0));
		field.pointer_move(260.0, 100.0);
		field.tick();
		assert_eq!(field.rocks()[0].x, 20.0);
		assert_eq!(field.rocks()[0].vx, 1.0);
		assert_eq!(field.rocks()[1].x, 61.0);
	}

	#[test]
	fn only_one_rock_is_held() {
		let mut field = field(vec![rock(0, 20.0, 20.0), rock(1, 60.0, 60.0)]);
		assert!(field.pointer_down(200.0, 100.0));
		assert!(!field.pointer_down(600.0, 300.0));
		assert_eq!(field.drag().map(|d| d.rock), Some(0));
		assert_eq!(field.pointer_up(), Some(0));
		assert_eq!(field.pointer_up(), None);
		assert!(field.pointer_down(600.0, 300.0));
	}

	#[test]
	fn press_on_empty_space_grabs_nothing() {
		let mut field = field(vec![rock(0, 20.0, 20.0)]);
		assert!(!field.pointer_down(900.0, 450.0));
		field.pointer_move(950.0, 450.0);
		assert!(field.drag().is_none());
		assert_eq!(field.pointer_leave(), None);
	}

	#[test]
	fn topmost_rock_wins_hit_test() {
		let field = field(vec![rock(0, 50.0, 50.0), rock(1, 51.0, 50.0)]);
		assert_eq!(field.rock_at(505.0, 250.0), Some(1));
	}

	#[test]
	fn release_applies_drag_direction() {
		let mut field = field(vec![rock(0, 50.0, 50.0)]);
		field.pointer_down(500.0, 250.0);
		field.pointer_move(440.0, 250.0);
		field.pointer_leave();
		let r = &field.rocks()[0];
		assert!(r.vx < 0.0);
		assert_eq!(r.vy, 0.0);
		assert!(r.spin < 0.0);
	}

	#[test]
	fn aim_line_is_clamped() {
		let mut field = field(vec![rock(0, 50.0, 50.0)]);
		assert_eq!(field.aim_line(), None);
		field.pointer_down(500.0, 250.0);
		field.pointer_move(500.0, 650.0);
		let (from, to) = field.aim_line().unwrap();
		assert_eq!(from, (500.0, 250.0));
		assert!((to.1 - 350.0).abs() < 1e-9);
	}

	#[test]
	fn resize_keeps_relative_position() {
		let mut field = field(vec![rock(0, 25.0, 50.0)]);
		field.resize(2000.0, 1000.0);
		assert_eq!(field.center(&field.rocks()[0]), (500.0, 500.0));
	}

	#[test]
	fn scatter_stays_inside_bounds() {
		use rand::SeedableRng;
		use rand::rngs::SmallRng;

		let mut rng = SmallRng::seed_from_u64(3);
		let field = RockField::scatter(8, StarField::default(), 800.0, 600.0, &mut rng);
		assert_eq!(field.rocks().len(), 8);
		for r in field.rocks() {
			assert!((MIN_PERCENT..=MAX_PERCENT).contains(&r.x));
			assert!((MIN_SIZE..MAX_SIZE).contains(&r.size));
			assert_eq!(r.outline.len(), OUTLINE_POINTS);
		}
	}
}
