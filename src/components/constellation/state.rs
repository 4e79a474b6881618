use std::f64::consts::PI;

use super::types::{NodeRecord, NodeStatus, PATH_BLUE, Rgb, WHITE};
use crate::components::starfield::StarField;

/// Hit radius around a node centre, independent of its drawn size.
pub const HIT_RADIUS: f64 = 30.0;
pub const RESTING_SIZE: f64 = 15.0;
pub const HOVER_SIZE: f64 = 25.0;
/// Fraction of the remaining size gap closed each tick.
pub const SIZE_EASING: f64 = 0.1;
pub const PULSE_STEP: f64 = 0.02;
pub const PULSE_AMPLITUDE: f64 = 2.0;
const PULSE_STAGGER: f64 = PI * 0.5;
/// Distance within which a node reaches out to the pointer.
pub const POINTER_REACH: f64 = 200.0;
const POINTER_LINE_ALPHA: f64 = 0.3;
const POINTER_LINE_WIDTH: f64 = 1.0;
const PATH_LINE_ALPHA: f64 = 0.6;
const PATH_LINE_WIDTH: f64 = 2.0;
const GLOW_PADDING: f64 = 5.0;
/// Horizontal travel after which a press counts as a pan rather than a click.
const PAN_SLOP: f64 = 4.0;

pub const CARD_WIDTH: f64 = 259.0;
pub const CARD_HEIGHT: f64 = 180.0;
const CARD_BELOW: f64 = 80.0;
const CARD_ABOVE: f64 = -250.0;
const CARD_EDGE_MARGIN: f64 = 300.0;
const CARD_TITLE_LIMIT: usize = 35;
const CARD_DESCRIPTION_LIMIT: usize = 60;

#[derive(Clone, Debug, PartialEq)]
pub struct ConstellationOptions {
	pub star_count: usize,
	/// Allow dragging the scene left by up to this fraction of the width.
	pub pan_extent: Option<f64>,
	/// Draw a summary card next to every node.
	pub cards: bool,
}

impl Default for ConstellationOptions {
	fn default() -> Self {
		Self {
			star_count: 200,
			pan_extent: None,
			cards: false,
		}
	}
}

/// Runtime animation fields of one node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeSprite {
	pub x: f64,
	pub y: f64,
	pub current_size: f64,
	pub target_size: f64,
	pub pulse_phase: f64,
}

impl NodeSprite {
	fn place(record: &NodeRecord, index: usize, width: f64, height: f64) -> Self {
		Self {
			x: record.x * width,
			y: record.y * height,
			current_size: RESTING_SIZE,
			target_size: RESTING_SIZE,
			pulse_phase: index as f64 * PULSE_STAGGER,
		}
	}

	pub fn step(&mut self) {
		self.pulse_phase += PULSE_STEP;
		self.current_size += (self.target_size - self.current_size) * SIZE_EASING;
	}

	pub fn pulse(&self) -> f64 {
		self.pulse_phase.sin() * PULSE_AMPLITUDE
	}

	pub fn radius(&self) -> f64 {
		self.current_size + self.pulse()
	}

	fn distance_to(&self, x: f64, y: f64) -> f64 {
		(self.x - x).hypot(self.y - y)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectorKind {
	/// Segment between consecutive nodes.
	Path,
	/// Proximity line from a node to the pointer.
	Pointer,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Connector {
	pub kind: ConnectorKind,
	pub from: (f64, f64),
	pub to: (f64, f64),
	pub color: Rgb,
	pub width: f64,
	pub alpha: f64,
}

/// One concentric disc of a node, outermost first.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
	pub radius: f64,
	pub color: Rgb,
	pub alpha: f64,
}

/// Emitted when the hovered node changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverChange {
	pub previous: Option<usize>,
	pub current: Option<usize>,
}

/// Summary card drawn beside a node. `x` is the card's horizontal centre.
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
	pub node: usize,
	pub x: f64,
	pub y: f64,
	pub title: String,
	pub description: String,
	pub status: NodeStatus,
	pub image: Option<&'static str>,
	pub highlighted: bool,
}

impl Card {
	fn contains(&self, x: f64, y: f64) -> bool {
		(x - self.x).abs() <= CARD_WIDTH / 2.0 && y >= self.y && y <= self.y + CARD_HEIGHT
	}
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub offset: f64,
	active: bool,
	moved: bool,
	start_x: f64,
	offset_start: f64,
}

/// Cut `text` to `limit` characters, ending in an ellipsis when shortened.
pub fn truncate(text: &str, limit: usize) -> String {
	if text.chars().count() <= limit {
		return text.to_owned();
	}
	let mut out: String = text.chars().take(limit.saturating_sub(3)).collect();
	out.push_str("...");
	out
}

/// Authoritative animated state of a roadmap constellation.
///
/// Node records are borrowed from static content and never change; only the
/// parallel [`NodeSprite`] list, the star field, hover and pan are mutated.
/// Pointer coordinates passed in are canvas-local; with panning enabled they
/// are shifted into scene space before hit testing.
pub struct ConstellationState {
	records: &'static [NodeRecord],
	sprites: Vec<NodeSprite>,
	stars: StarField,
	pointer: (f64, f64),
	hovered: Option<usize>,
	hovered_card: Option<usize>,
	pan: PanState,
	options: ConstellationOptions,
	pub width: f64,
	pub height: f64,
}

impl ConstellationState {
	pub fn new(
		records: &'static [NodeRecord],
		width: f64,
		height: f64,
		stars: StarField,
		options: ConstellationOptions,
	) -> Self {
		let sprites = records
			.iter()
			.enumerate()
			.map(|(i, record)| NodeSprite::place(record, i, width, height))
			.collect();

		Self {
			records,
			sprites,
			stars,
			pointer: (width / 2.0, height / 2.0),
			hovered: None,
			hovered_card: None,
			pan: PanState::default(),
			options,
			width,
			height,
		}
	}

	pub fn sprites(&self) -> &[NodeSprite] {
		&self.sprites
	}

	pub fn stars(&self) -> &StarField {
		&self.stars
	}

	pub fn hovered(&self) -> Option<usize> {
		self.hovered
	}

	pub fn hovered_card(&self) -> Option<usize> {
		self.hovered_card
	}

	pub fn pan_offset(&self) -> f64 {
		self.pan.offset
	}

	pub fn is_panning(&self) -> bool {
		self.pan.active
	}

	pub fn screen_to_scene(&self, sx: f64, sy: f64) -> (f64, f64) {
		(sx - self.pan.offset, sy)
	}

	/// Pointer position in scene coordinates.
	pub fn pointer(&self) -> (f64, f64) {
		self.screen_to_scene(self.pointer.0, self.pointer.1)
	}

	fn pan_bounds(&self) -> Option<(f64, f64)> {
		self.options
			.pan_extent
			.map(|extent| (-(extent * self.width).abs(), 0.0))
	}

	/// Closest node whose hit region contains the screen point.
	pub fn node_at(&self, sx: f64, sy: f64) -> Option<usize> {
		let (x, y) = self.screen_to_scene(sx, sy);
		self.sprites
			.iter()
			.enumerate()
			.map(|(i, sprite)| (i, sprite.distance_to(x, y)))
			.filter(|&(_, d)| d <= HIT_RADIUS)
			.min_by(|a, b| a.1.total_cmp(&b.1))
			.map(|(i, _)| i)
	}

	pub fn card_at(&self, sx: f64, sy: f64) -> Option<usize> {
		if !self.options.cards {
			return None;
		}
		let (x, y) = self.screen_to_scene(sx, sy);
		self.cards()
			.into_iter()
			.rev()
			.find(|card| card.contains(x, y))
			.map(|card| card.node)
	}

	/// Move hover to `node`, swapping target sizes of the old and new node.
	pub fn set_hover(&mut self, node: Option<usize>) -> Option<HoverChange> {
		let node = node.filter(|&i| i < self.sprites.len());
		if self.hovered == node {
			return None;
		}
		let previous = self.hovered.take();
		if let Some(i) = previous {
			self.sprites[i].target_size = RESTING_SIZE;
		}
		if let Some(i) = node {
			self.sprites[i].target_size = HOVER_SIZE;
		}
		self.hovered = node;
		Some(HoverChange {
			previous,
			current: node,
		})
	}

	pub fn pointer_move(&mut self, sx: f64, sy: f64) -> Option<HoverChange> {
		self.pointer = (sx, sy);
		if self.pan.active {
			if let Some((min, max)) = self.pan_bounds() {
				let delta = sx - self.pan.start_x;
				if delta.abs() > PAN_SLOP {
					self.pan.moved = true;
				}
				self.pan.offset = (self.pan.offset_start + delta).clamp(min, max);
			}
		}
		self.hovered_card = self.card_at(sx, sy);
		let hovered = self.node_at(sx, sy);
		self.set_hover(hovered)
	}

	pub fn pointer_down(&mut self, sx: f64, _sy: f64) {
		self.pan.moved = false;
		if self.pan_bounds().is_some() {
			self.pan.active = true;
			self.pan.start_x = sx;
			self.pan.offset_start = self.pan.offset;
		}
	}

	pub fn pointer_up(&mut self) {
		self.pan.active = false;
	}

	pub fn pointer_leave(&mut self) -> Option<HoverChange> {
		self.pan.active = false;
		self.hovered_card = None;
		self.set_hover(None)
	}

	/// Node selected by a click at the screen point. A click that ends a pan
	/// gesture selects nothing.
	pub fn click(&mut self, sx: f64, sy: f64) -> Option<usize> {
		if std::mem::take(&mut self.pan.moved) {
			return None;
		}
		self.node_at(sx, sy).or_else(|| self.card_at(sx, sy))
	}

	pub fn tick(&mut self) {
		self.stars.tick();
		for sprite in &mut self.sprites {
			sprite.step();
		}
	}

	/// Re-project nodes onto a new viewport. Sizes, pulse phases and hover
	/// are kept.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		for (sprite, record) in self.sprites.iter_mut().zip(self.records) {
			sprite.x = record.x * width;
			sprite.y = record.y * height;
		}
		if let Some((min, max)) = self.pan_bounds() {
			self.pan.offset = self.pan.offset.clamp(min, max);
		}
	}

	/// Every line for the current frame: path segments in list order, then
	/// pointer proximity lines.
	pub fn connectors(&self) -> Vec<Connector> {
		let mut lines: Vec<Connector> = self
			.sprites
			.windows(2)
			.zip(self.records)
			.map(|(pair, record)| Connector {
				kind: ConnectorKind::Path,
				from: (pair[0].x, pair[0].y),
				to: (pair[1].x, pair[1].y),
				color: record.status.path_color(),
				width: PATH_LINE_WIDTH,
				alpha: PATH_LINE_ALPHA,
			})
			.collect();

		let (px, py) = self.pointer();
		lines.extend(self.sprites.iter().filter_map(|sprite| {
			let distance = sprite.distance_to(px, py);
			(distance < POINTER_REACH).then(|| Connector {
				kind: ConnectorKind::Pointer,
				from: (sprite.x, sprite.y),
				to: (px, py),
				color: PATH_BLUE,
				width: POINTER_LINE_WIDTH,
				alpha: (POINTER_REACH - distance) / POINTER_REACH * POINTER_LINE_ALPHA,
			})
		}));
		lines
	}

	/// Concentric discs for node `index`: glow (completed only), body and
	/// inner highlight.
	pub fn rings(&self, index: usize) -> Vec<Ring> {
		let (Some(sprite), Some(record)) = (self.sprites.get(index), self.records.get(index)) else {
			return Vec::new();
		};
		let radius = sprite.radius();
		let mut rings = Vec::with_capacity(3);
		if record.status.has_glow() {
			rings.push(Ring {
				radius: radius + GLOW_PADDING,
				color: PATH_BLUE,
				alpha: 0.2,
			});
		}
		rings.push(Ring {
			radius,
			color: record.status.node_color(),
			alpha: 0.9,
		});
		rings.push(Ring {
			radius: radius * 0.5,
			color: WHITE,
			alpha: 0.4,
		});
		rings
	}

	/// Card layout: even nodes hang their card below, odd ones above, unless
	/// that would run off the top or bottom of the viewport.
	pub fn cards(&self) -> Vec<Card> {
		if !self.options.cards {
			return Vec::new();
		}
		self.sprites
			.iter()
			.zip(self.records)
			.enumerate()
			.map(|(i, (sprite, record))| {
				let below = i % 2 == 0;
				let mut offset = if below { CARD_BELOW } else { CARD_ABOVE };
				if !below && sprite.y < CARD_EDGE_MARGIN {
					offset = CARD_BELOW;
				}
				if below && sprite.y > self.height - CARD_EDGE_MARGIN {
					offset = CARD_ABOVE;
				}
				Card {
					node: i,
					x: sprite.x,
					y: sprite.y + offset,
					title: truncate(record.title, CARD_TITLE_LIMIT),
					description: truncate(record.description, CARD_DESCRIPTION_LIMIT),
					status: record.status,
					image: record.image,
					highlighted: self.hovered_card == Some(i),
				}
			})
			.collect()
	}
}
