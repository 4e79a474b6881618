mod component;
mod render;
mod state;
mod types;

pub use component::ConstellationCanvas;
pub use state::ConstellationOptions;
pub use types::{
	FeedbackSection, Interview, Need, NodeRecord, NodeStatus, QuestionSection, Questionnaire, Video,
};
