use std::cell::RefCell;
use std::collections::HashMap;
use std::f64::consts::TAU;

use log::warn;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::state::{CARD_HEIGHT, CARD_WIDTH, Card, ConstellationState};
use crate::components::surface::Scene;

const CARD_PADDING: f64 = 10.0;
const CARD_IMAGE_TOP: f64 = 45.0;
const CARD_IMAGE_HEIGHT: f64 = 90.0;

thread_local! {
	static CARD_IMAGES: RefCell<HashMap<&'static str, Option<HtmlImageElement>>> =
		RefCell::new(HashMap::new());
}

/// Loaded image for `src`, starting the download on first request. `None`
/// until the browser has decoded it.
fn card_image(src: &'static str) -> Option<HtmlImageElement> {
	CARD_IMAGES.with_borrow_mut(|images| {
		let image = images.entry(src).or_insert_with(|| match HtmlImageElement::new() {
			Ok(img) => {
				img.set_src(src);
				Some(img)
			}
			Err(e) => {
				warn!("card image {src} unavailable: {e:?}");
				None
			}
		});
		image
			.as_ref()
			.filter(|img| img.complete() && img.natural_width() > 0)
			.cloned()
	})
}

impl Scene for ConstellationState {
	fn tick(&mut self) {
		ConstellationState::tick(self);
	}

	fn render(&self, ctx: &CanvasRenderingContext2d) {
		render(self, ctx);
	}

	fn resize(&mut self, width: f64, height: f64) {
		ConstellationState::resize(self, width, height);
	}
}

/// Full redraw; the page background shows through the cleared canvas.
pub fn render(state: &ConstellationState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.pan_offset(), 0.0);
	state.stars().draw(ctx);
	draw_connectors(state, ctx);
	draw_nodes(state, ctx);
	for card in state.cards() {
		draw_card(&card, ctx);
	}
	ctx.restore();
}

fn draw_connectors(state: &ConstellationState, ctx: &CanvasRenderingContext2d) {
	for line in state.connectors() {
		ctx.set_stroke_style_str(&line.color.rgba(line.alpha));
		ctx.set_line_width(line.width);
		ctx.begin_path();
		ctx.move_to(line.from.0, line.from.1);
		ctx.line_to(line.to.0, line.to.1);
		ctx.stroke();
	}
}

fn draw_nodes(state: &ConstellationState, ctx: &CanvasRenderingContext2d) {
	for (i, sprite) in state.sprites().iter().enumerate() {
		for ring in state.rings(i) {
			if ring.radius <= 0.0 {
				continue;
			}
			ctx.begin_path();
			let _ = ctx.arc(sprite.x, sprite.y, ring.radius, 0.0, TAU);
			ctx.set_fill_style_str(&ring.color.rgba(ring.alpha));
			ctx.fill();
		}
	}
}

fn draw_card(card: &Card, ctx: &CanvasRenderingContext2d) {
	let left = card.x - CARD_WIDTH / 2.0;
	let inner_width = CARD_WIDTH - 2.0 * CARD_PADDING;
	let (fill, border) = if card.highlighted {
		(0.9, card.status.highlight_color().rgba(0.7))
	} else {
		(0.8, card.status.path_color().rgba(0.5))
	};
	ctx.set_fill_style_str(&format!("rgba(0, 0, 0, {fill})"));
	ctx.fill_rect(left, card.y, CARD_WIDTH, CARD_HEIGHT);
	ctx.set_stroke_style_str(&border);
	ctx.set_line_width(2.0);
	ctx.stroke_rect(left, card.y, CARD_WIDTH, CARD_HEIGHT);

	ctx.set_fill_style_str("white");
	ctx.set_font("bold 13px sans-serif");
	let _ = ctx.fill_text_with_max_width(&card.title, left + CARD_PADDING, card.y + 24.0, inner_width);

	if let Some(img) = card.image.and_then(card_image) {
		let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
			&img,
			left + CARD_PADDING,
			card.y + CARD_IMAGE_TOP,
			inner_width,
			CARD_IMAGE_HEIGHT,
		);
	}

	ctx.set_fill_style_str("#d1d5db");
	ctx.set_font("10px sans-serif");
	let _ = ctx.fill_text_with_max_width(
		&card.description,
		left + CARD_PADDING,
		card.y + CARD_HEIGHT - 20.0,
		inner_width,
	);
}
