use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use web_sys::{HtmlCanvasElement, MouseEvent};

use super::state::{ConstellationOptions, ConstellationState, HoverChange};
use super::types::NodeRecord;
use crate::components::overlay::DetailState;
use crate::components::starfield::StarField;
use crate::components::surface::{SurfaceSlot, local_point, set_cursor};

/// Full-viewport animated roadmap. Clicking a node writes the selection into
/// `detail`; the hovered node id is published through `hovered`.
#[component]
pub fn ConstellationCanvas(
	nodes: &'static [NodeRecord],
	detail: RwSignal<DetailState>,
	#[prop(optional)] hovered: Option<RwSignal<Option<&'static str>>>,
	#[prop(default = ConstellationOptions::default())] options: ConstellationOptions,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let slot: SurfaceSlot<ConstellationState> = SurfaceSlot::new();
	let idle_cursor = if options.pan_extent.is_some() {
		"grab"
	} else {
		"default"
	};

	let slot_init = slot.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let options = options.clone();
		slot_init.mount("constellation", canvas.into(), move |w, h| {
			let mut rng = SmallRng::seed_from_u64(js_sys::Date::now() as u64);
			let star_width = w * (1.0 + options.pan_extent.unwrap_or(0.0));
			let stars = StarField::initialize(options.star_count, star_width, h, &mut rng);
			ConstellationState::new(nodes, w, h, stars, options)
		});
	});

	let slot_cleanup = StoredValue::new_local(slot.clone());
	on_cleanup(move || {
		slot_cleanup.try_with_value(SurfaceSlot::unmount);
	});

	let canvas_point = move |ev: &MouseEvent| -> Option<(HtmlCanvasElement, (f64, f64))> {
		let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
		let point = local_point(&canvas, ev.client_x(), ev.client_y());
		Some((canvas, point))
	};

	let publish_hover = move |change: Option<HoverChange>| {
		if let (Some(change), Some(hovered)) = (change, hovered) {
			hovered.set(change.current.and_then(|i| nodes.get(i)).map(|n| n.id));
		}
	};

	let slot_mm = slot.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((canvas, (x, y))) = canvas_point(&ev) else {
			return;
		};
		let Some((change, over_target, panning)) = slot_mm.with_scene(|s| {
			let change = s.pointer_move(x, y);
			let over = s.hovered().is_some() || s.hovered_card().is_some();
			(change, over, s.is_panning())
		}) else {
			return;
		};
		let cursor = match (over_target, panning) {
			(_, true) => "grabbing",
			(true, false) => "pointer",
			(false, false) => idle_cursor,
		};
		set_cursor(&canvas, cursor);
		publish_hover(change);
	};

	let slot_md = slot.clone();
	let on_mousedown = move |ev: MouseEvent| {
		if let Some((_, (x, y))) = canvas_point(&ev) {
			slot_md.with_scene(|s| s.pointer_down(x, y));
		}
	};

	let slot_mu = slot.clone();
	let on_mouseup = move |_: MouseEvent| {
		slot_mu.with_scene(|s| s.pointer_up());
	};

	let slot_ml = slot.clone();
	let on_mouseleave = move |_: MouseEvent| {
		let change = slot_ml.with_scene(|s| s.pointer_leave()).flatten();
		publish_hover(change);
	};

	let slot_click = slot.clone();
	let on_click = move |ev: MouseEvent| {
		let Some((_, (x, y))) = canvas_point(&ev) else {
			return;
		};
		if let Some(index) = slot_click.with_scene(|s| s.click(x, y)).flatten() {
			detail.update(|d| {
				d.select(nodes, index);
			});
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="constellation-canvas"
			on:mousemove=on_mousemove
			on:mousedown=on_mousedown
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:click=on_click
			style=format!("display: block; position: absolute; inset: 0; cursor: {idle_cursor};")
		/>
	}
}
