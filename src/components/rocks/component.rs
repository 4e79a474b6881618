use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

use super::state::RockField;
use crate::components::starfield::StarField;
use crate::components::surface::{SurfaceSlot, local_point, set_cursor};

/// Full-viewport field of draggable rocks over a star backdrop.
#[component]
pub fn RockCanvas(
	#[prop(default = 7)] rock_count: usize,
	#[prop(default = 150)] star_count: usize,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let slot: SurfaceSlot<RockField> = SurfaceSlot::new();

	let slot_init = slot.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		slot_init.mount("rocks", canvas.into(), move |w, h| {
			let mut rng = SmallRng::seed_from_u64(js_sys::Date::now() as u64);
			let stars = StarField::initialize(star_count, w, h, &mut rng);
			RockField::scatter(rock_count, stars, w, h, &mut rng)
		});
	});

	let slot_cleanup = StoredValue::new_local(slot.clone());
	on_cleanup(move || {
		slot_cleanup.try_with_value(SurfaceSlot::unmount);
	});

	let canvas = move || -> Option<HtmlCanvasElement> { canvas_ref.get().map(Into::into) };
	let touch_point = move |ev: &TouchEvent| -> Option<(f64, f64)> {
		let touch = ev.changed_touches().get(0)?;
		Some(local_point(&canvas()?, touch.client_x(), touch.client_y()))
	};

	let slot_md = slot.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas() else {
			return;
		};
		let (x, y) = local_point(&canvas, ev.client_x(), ev.client_y());
		if slot_md.with_scene(|s| s.pointer_down(x, y)) == Some(true) {
			set_cursor(&canvas, "grabbing");
		}
	};

	let slot_mm = slot.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas() else {
			return;
		};
		let (x, y) = local_point(&canvas, ev.client_x(), ev.client_y());
		let cursor = slot_mm.with_scene(|s| {
			s.pointer_move(x, y);
			match (s.drag().is_some(), s.rock_at(x, y).is_some()) {
				(true, _) => "grabbing",
				(false, true) => "grab",
				(false, false) => "default",
			}
		});
		if let Some(cursor) = cursor {
			set_cursor(&canvas, cursor);
		}
	};

	let slot_mu = slot.clone();
	let on_mouseup = move |_: MouseEvent| {
		slot_mu.with_scene(|s| s.pointer_up());
		if let Some(canvas) = canvas() {
			set_cursor(&canvas, "grab");
		}
	};

	let slot_ml = slot.clone();
	let on_mouseleave = move |_: MouseEvent| {
		slot_ml.with_scene(|s| s.pointer_leave());
		if let Some(canvas) = canvas() {
			set_cursor(&canvas, "default");
		}
	};

	let slot_ts = slot.clone();
	let on_touchstart = move |ev: TouchEvent| {
		if let Some((x, y)) = touch_point(&ev) {
			if slot_ts.with_scene(|s| s.pointer_down(x, y)) == Some(true) {
				ev.prevent_default();
			}
		}
	};

	let slot_tm = slot.clone();
	let on_touchmove = move |ev: TouchEvent| {
		if let Some((x, y)) = touch_point(&ev) {
			let held = slot_tm.with_scene(|s| {
				s.pointer_move(x, y);
				s.drag().is_some()
			});
			if held == Some(true) {
				ev.prevent_default();
			}
		}
	};

	let slot_te = slot.clone();
	let on_touchend = move |_: TouchEvent| {
		slot_te.with_scene(|s| s.pointer_up());
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="rock-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:touchstart=on_touchstart
			on:touchmove=on_touchmove
			on:touchend=on_touchend
			style="display: block; position: fixed; inset: 0; z-index: 0; touch-action: none;"
		/>
	}
}
