use log::debug;

use crate::components::constellation::NodeRecord;

/// Horizontal travel a touch must exceed to turn the page.
pub const SWIPE_THRESHOLD: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideKind {
	Overview,
	Interviews,
	Questionnaires,
	Needs,
	Feedback,
	Videos,
}

impl SlideKind {
	/// Heading shown above the slide; the overview uses the node title.
	pub fn title(self, node: &NodeRecord) -> &'static str {
		match self {
			Self::Overview => node.title,
			Self::Interviews => "Entrevistas Realizadas",
			Self::Questionnaires => "Cuestionarios Aplicados",
			Self::Needs => "Necesidades Clave del Usuario",
			Self::Feedback => "Feedback Recibido",
			Self::Videos => "Videos de Demostración",
		}
	}
}

/// Slides for `node`, overview first, the rest only when the node carries
/// matching content.
pub fn slides_for(node: &NodeRecord) -> Vec<SlideKind> {
	let mut slides = vec![SlideKind::Overview];
	let optional = [
		(!node.interviews.is_empty(), SlideKind::Interviews),
		(!node.questionnaires.is_empty(), SlideKind::Questionnaires),
		(!node.needs.is_empty(), SlideKind::Needs),
		(!node.videos.is_empty(), SlideKind::Videos),
		(!node.feedback.is_empty(), SlideKind::Feedback),
	];
	slides.extend(optional.into_iter().filter(|(present, _)| *present).map(|(_, kind)| kind));
	slides
}

/// User intent directed at the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayCommand {
	Next,
	Previous,
	GoTo(usize),
	Close,
}

pub fn command_for_key(key: &str) -> Option<OverlayCommand> {
	match key {
		"ArrowRight" => Some(OverlayCommand::Next),
		"ArrowLeft" => Some(OverlayCommand::Previous),
		"Escape" => Some(OverlayCommand::Close),
		_ => None,
	}
}

/// Selected node and its slide position.
///
/// Selection and slide index change together, so a new selection is never
/// observed with the previous node's index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailState {
	selected: Option<usize>,
	slides: Vec<SlideKind>,
	index: usize,
}

impl DetailState {
	/// Select `nodes[index]` and restart at its first slide. Indices outside
	/// `nodes` are refused.
	pub fn select(&mut self, nodes: &[NodeRecord], index: usize) -> bool {
		let Some(node) = nodes.get(index) else {
			debug!("ignoring selection of missing node {index}");
			return false;
		};
		self.selected = Some(index);
		self.slides = slides_for(node);
		self.index = 0;
		true
	}

	pub fn close(&mut self) {
		*self = Self::default();
	}

	pub fn selected(&self) -> Option<usize> {
		self.selected
	}

	pub fn is_open(&self) -> bool {
		self.selected.is_some()
	}

	pub fn slides(&self) -> &[SlideKind] {
		&self.slides
	}

	pub fn index(&self) -> usize {
		self.index
	}

	pub fn current(&self) -> Option<SlideKind> {
		self.slides.get(self.index).copied()
	}

	pub fn next(&mut self) {
		if !self.slides.is_empty() {
			self.index = (self.index + 1) % self.slides.len();
		}
	}

	pub fn previous(&mut self) {
		let count = self.slides.len();
		if count > 0 {
			self.index = (self.index + count - 1) % count;
		}
	}

	/// Jump to slide `index`. Out-of-range targets leave the position as is.
	pub fn go_to(&mut self, index: usize) -> bool {
		if index >= self.slides.len() {
			debug!("ignoring jump to slide {index} of {}", self.slides.len());
			return false;
		}
		self.index = index;
		true
	}

	pub fn apply(&mut self, command: OverlayCommand) {
		if !self.is_open() {
			return;
		}
		match command {
			OverlayCommand::Next => self.next(),
			OverlayCommand::Previous => self.previous(),
			OverlayCommand::GoTo(index) => {
				self.go_to(index);
			}
			OverlayCommand::Close => self.close(),
		}
	}
}

/// Tracks one horizontal touch gesture over the overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SwipeTracker {
	start: Option<f64>,
	end: Option<f64>,
}

impl SwipeTracker {
	pub fn begin(&mut self, x: f64) {
		self.start = Some(x);
		self.end = None;
	}

	pub fn track(&mut self, x: f64) {
		self.end = Some(x);
	}

	/// Finish the gesture. A leftward swipe beyond the threshold pages
	/// forward, a rightward one pages back; taps do nothing.
	pub fn finish(&mut self) -> Option<OverlayCommand> {
		let (start, end) = (self.start.take()?, self.end.take()?);
		let distance = start - end;
		if distance > SWIPE_THRESHOLD {
			Some(OverlayCommand::Next)
		} else if distance < -SWIPE_THRESHOLD {
			Some(OverlayCommand::Previous)
		} else {
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::constellation::{Interview, Need, NodeStatus, Questionnaire};
	use crate::content;

	const INTERVIEW: Interview = Interview {
		id: "A",
		name: "Participante A",
		profile: "Estudiante intermedio",
		description: "",
		link: "https://example.org/a",
		image: None,
	};

	static NODES: [NodeRecord; 3] = [
		NodeRecord {
			interviews: &[INTERVIEW],
			questionnaires: &[Questionnaire {
				title: "Cuestionario",
				audience: "Participantes",
				sections: &[],
			}],
			..NodeRecord::new("1", "Entrevistas", 0.2, 0.3, NodeStatus::Completed)
		},
		NodeRecord {
			needs: &[Need {
				number: "1",
				description: "Practicar",
			}],
			..NodeRecord::new("1.5", "Necesidades", 0.35, 0.2, NodeStatus::Completed)
		},
		NodeRecord::new("4", "Desarrollo", 0.8, 0.5, NodeStatus::InProgress),
	];

	fn open(index: usize) -> DetailState {
		let mut state = DetailState::default();
		assert!(state.select(&NODES, index));
		state
	}

	#[test]
	fn slides_reflect_node_content() {
		assert_eq!(
			slides_for(&NODES[0]),
			vec![
				SlideKind::Overview,
				SlideKind::Interviews,
				SlideKind::Questionnaires
			]
		);
		assert_eq!(
			slides_for(&NODES[1]),
			vec![SlideKind::Overview, SlideKind::Needs]
		);
		assert_eq!(slides_for(&NODES[2]), vec![SlideKind::Overview]);
	}

	#[test]
	fn selecting_another_node_resets_index() {
		let mut state = open(0);
		state.next();
		state.next();
		assert_eq!(state.index(), 2);

		state.select(&NODES, 1);
		assert_eq!(state.index(), 0);
		assert_eq!(state.slides(), &[SlideKind::Overview, SlideKind::Needs]);
		assert!(!state.slides().contains(&SlideKind::Interviews));
	}

	#[test]
	fn next_wraps_after_slide_count_steps() {
		let mut state = open(0);
		state.next();
		let start = state.index();
		for _ in 0..state.slides().len() {
			state.next();
		}
		assert_eq!(state.index(), start);
	}

	#[test]
	fn previous_wraps_after_slide_count_steps() {
		let mut state = open(0);
		state.previous();
		assert_eq!(state.index(), 2);
		let start = state.index();
		for _ in 0..state.slides().len() {
			state.previous();
		}
		assert_eq!(state.index(), start);
	}

	#[test]
	fn single_slide_navigation_stays_put() {
		let mut state = open(2);
		state.next();
		state.previous();
		assert_eq!(state.index(), 0);
		assert_eq!(state.current(), Some(SlideKind::Overview));
	}

	#[test]
	fn go_to_ignores_out_of_range() {
		let mut state = open(0);
		assert!(state.go_to(2));
		assert!(!state.go_to(3));
		assert_eq!(state.index(), 2);
	}

	#[test]
	fn select_refuses_missing_node() {
		let mut state = open(1);
		assert!(!state.select(&NODES, 9));
		assert_eq!(state.selected(), Some(1));
	}

	#[test]
	fn close_clears_selection() {
		let mut state = open(0);
		state.apply(OverlayCommand::Close);
		assert!(!state.is_open());
		assert!(state.slides().is_empty());
		state.apply(OverlayCommand::Next);
		assert_eq!(state.index(), 0);
	}

	#[test]
	fn keys_map_to_commands() {
		assert_eq!(command_for_key("ArrowRight"), Some(OverlayCommand::Next));
		assert_eq!(command_for_key("ArrowLeft"), Some(OverlayCommand::Previous));
		assert_eq!(command_for_key("Escape"), Some(OverlayCommand::Close));
		assert_eq!(command_for_key("Enter"), None);
	}

	#[test]
	fn swipe_threshold_boundary() {
		let mut swipe = SwipeTracker::default();
		swipe.begin(200.0);
		swipe.track(149.0);
		assert_eq!(swipe.finish(), Some(OverlayCommand::Next));

		swipe.begin(200.0);
		swipe.track(151.0);
		assert_eq!(swipe.finish(), None);

		swipe.begin(200.0);
		swipe.track(150.0);
		assert_eq!(swipe.finish(), None);

		swipe.begin(100.0);
		swipe.track(151.0);
		assert_eq!(swipe.finish(), Some(OverlayCommand::Previous));
	}

	#[test]
	fn tap_without_move_is_not_a_swipe() {
		let mut swipe = SwipeTracker::default();
		swipe.begin(0.0);
		assert_eq!(swipe.finish(), None);
		swipe.track(500.0);
		assert_eq!(swipe.finish(), None);
	}

	#[test]
	fn site_content_slides() {
		assert_eq!(
			slides_for(&content::FINAL_PROJECT[0]),
			vec![
				SlideKind::Overview,
				SlideKind::Interviews,
				SlideKind::Questionnaires
			]
		);
		assert_eq!(
			slides_for(&content::FINAL_PROJECT[1]),
			vec![SlideKind::Overview, SlideKind::Needs]
		);
		assert_eq!(
			slides_for(&content::VR_ROADMAP[1]),
			vec![SlideKind::Overview, SlideKind::Feedback]
		);
		assert_eq!(
			slides_for(&content::VR_ROADMAP[4]),
			vec![SlideKind::Overview, SlideKind::Videos]
		);
	}
}
