mod component;
mod slides;

pub use component::DetailOverlay;
pub use slides::DetailState;
