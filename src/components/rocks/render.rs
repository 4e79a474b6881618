use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::state::{Rock, RockField};
use crate::components::surface::Scene;

const ROCK_LIGHT: &str = "#6b7280";
const ROCK_DARK: &str = "#1f2937";
const ROCK_EDGE: &str = "rgba(156, 163, 175, 0.6)";
const HELD_EDGE: &str = "rgba(251, 191, 36, 0.9)";
const AIM_COLOR: &str = "rgba(251, 191, 36, 0.7)";

impl Scene for RockField {
	fn tick(&mut self) {
		RockField::tick(self);
	}

	fn render(&self, ctx: &CanvasRenderingContext2d) {
		render(self, ctx);
	}

	fn resize(&mut self, width: f64, height: f64) {
		RockField::resize(self, width, height);
	}
}

pub fn render(field: &RockField, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, field.width, field.height);
	field.stars().draw(ctx);

	let held = field.drag().map(|d| d.rock);
	for (i, rock) in field.rocks().iter().enumerate() {
		draw_rock(rock, field.center(rock), Some(i) == held, ctx);
	}

	if let Some((from, to)) = field.aim_line() {
		ctx.set_stroke_style_str(AIM_COLOR);
		ctx.set_line_width(2.0);
		ctx.begin_path();
		ctx.move_to(from.0, from.1);
		ctx.line_to(to.0, to.1);
		ctx.stroke();
		ctx.begin_path();
		let _ = ctx.arc(to.0, to.1, 4.0, 0.0, TAU);
		ctx.set_fill_style_str(AIM_COLOR);
		ctx.fill();
	}
}

fn draw_rock(rock: &Rock, (cx, cy): (f64, f64), held: bool, ctx: &CanvasRenderingContext2d) {
	let radius = rock.radius();
	ctx.save();
	let _ = ctx.translate(cx, cy);
	let _ = ctx.rotate(rock.rotation);

	ctx.begin_path();
	let step = TAU / rock.outline.len().max(1) as f64;
	for (k, factor) in rock.outline.iter().enumerate() {
		let angle = step * k as f64;
		let (x, y) = (angle.cos() * radius * factor, angle.sin() * radius * factor);
		if k == 0 {
			ctx.move_to(x, y);
		} else {
			ctx.line_to(x, y);
		}
	}
	ctx.close_path();

	// Light from the upper left.
	match ctx.create_radial_gradient(-radius * 0.3, -radius * 0.3, 0.0, 0.0, 0.0, radius) {
		Ok(gradient) => {
			let _ = gradient.add_color_stop(0.0, ROCK_LIGHT);
			let _ = gradient.add_color_stop(1.0, ROCK_DARK);
			ctx.set_fill_style_canvas_gradient(&gradient);
		}
		Err(_) => ctx.set_fill_style_str(ROCK_DARK),
	}
	ctx.fill();

	ctx.set_stroke_style_str(if held { HELD_EDGE } else { ROCK_EDGE });
	ctx.set_line_width(if held { 2.0 } else { 1.0 });
	ctx.stroke();
	ctx.restore();
}
