/// An sRGB colour as used by the canvas palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
	pub const fn from_hex(hex: u32) -> Self {
		Self((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
	}

	pub fn rgba(self, alpha: f64) -> String {
		format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha)
	}
}

pub const PATH_BLUE: Rgb = Rgb::from_hex(0x60a5fa);
pub const NODE_BLUE: Rgb = Rgb::from_hex(0x3b82f6);
pub const AMBER: Rgb = Rgb::from_hex(0xfbbf24);
pub const WHITE: Rgb = Rgb::from_hex(0xffffff);
pub const LIGHT_BLUE: Rgb = Rgb::from_hex(0x93c5fd);
pub const LIGHT_AMBER: Rgb = Rgb::from_hex(0xfcd34d);

/// Completion state of a roadmap milestone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeStatus {
	Completed,
	InProgress,
}

impl NodeStatus {
	/// Fill of the main node disc.
	pub fn node_color(self) -> Rgb {
		match self {
			Self::Completed => NODE_BLUE,
			Self::InProgress => AMBER,
		}
	}

	/// Stroke of a path segment leaving a node with this status.
	pub fn path_color(self) -> Rgb {
		match self {
			Self::Completed => PATH_BLUE,
			Self::InProgress => AMBER,
		}
	}

	/// Card border while the pointer is over the card.
	pub fn highlight_color(self) -> Rgb {
		match self {
			Self::Completed => LIGHT_BLUE,
			Self::InProgress => LIGHT_AMBER,
		}
	}

	pub fn has_glow(self) -> bool {
		matches!(self, Self::Completed)
	}

	pub fn label(self) -> &'static str {
		match self {
			Self::Completed => "Completado",
			Self::InProgress => "En Progreso",
		}
	}

	pub fn css_class(self) -> &'static str {
		match self {
			Self::Completed => "status-completed",
			Self::InProgress => "status-in-progress",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interview {
	pub id: &'static str,
	pub name: &'static str,
	pub profile: &'static str,
	pub description: &'static str,
	pub link: &'static str,
	pub image: Option<&'static str>,
}

impl Interview {
	/// Text shown in place of a missing photo.
	pub fn initial(&self) -> &'static str {
		if !self.id.is_empty() {
			return self.id;
		}
		match self.name.char_indices().nth(1) {
			Some((end, _)) => &self.name[..end],
			None => self.name,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuestionSection {
	pub title: Option<&'static str>,
	pub questions: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Questionnaire {
	pub title: &'static str,
	pub audience: &'static str,
	pub sections: &'static [QuestionSection],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Need {
	pub number: &'static str,
	pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeedbackSection {
	pub title: &'static str,
	pub recommendations: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Video {
	pub title: &'static str,
	pub url: &'static str,
	pub embed_id: &'static str,
}

impl Video {
	pub fn embed_url(&self) -> String {
		format!("https://www.youtube.com/embed/{}", self.embed_id)
	}
}

/// One milestone of a roadmap, authored once as static content.
///
/// `x`/`y` are normalised to `[0, 1]` and scaled to the viewport when the
/// graph is built or resized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeRecord {
	pub id: &'static str,
	pub title: &'static str,
	pub phase: &'static str,
	pub date: Option<&'static str>,
	pub x: f64,
	pub y: f64,
	pub status: NodeStatus,
	pub description: &'static str,
	pub achievements: &'static [&'static str],
	pub image: Option<&'static str>,
	pub video_link: Option<&'static str>,
	pub interviews: &'static [Interview],
	pub questionnaires: &'static [Questionnaire],
	pub needs: &'static [Need],
	pub feedback: &'static [FeedbackSection],
	pub videos: &'static [Video],
}

impl NodeRecord {
	/// A record with only the required fields; extend with struct update syntax.
	pub const fn new(id: &'static str, title: &'static str, x: f64, y: f64, status: NodeStatus) -> Self {
		Self {
			id,
			title,
			phase: "",
			date: None,
			x,
			y,
			status,
			description: "",
			achievements: &[],
			image: None,
			video_link: None,
			interviews: &[],
			questionnaires: &[],
			needs: &[],
			feedback: &[],
			videos: &[],
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hex_colors_split_into_channels() {
		assert_eq!(Rgb::from_hex(0x60a5fa), Rgb(0x60, 0xa5, 0xfa));
		assert_eq!(AMBER.rgba(0.5), "rgba(251, 191, 36, 0.5)");
	}

	#[test]
	fn status_palette_is_two_tone() {
		assert_ne!(
			NodeStatus::Completed.node_color(),
			NodeStatus::InProgress.node_color()
		);
		assert!(NodeStatus::Completed.has_glow());
		assert!(!NodeStatus::InProgress.has_glow());
	}

	#[test]
	fn interview_initial_falls_back_to_name() {
		let mut interview = Interview {
			id: "C",
			name: "Walter",
			profile: "",
			description: "",
			link: "",
			image: None,
		};
		assert_eq!(interview.initial(), "C");
		interview.id = "";
		assert_eq!(interview.initial(), "W");
	}
}
