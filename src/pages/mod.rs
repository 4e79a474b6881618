pub mod home;
pub mod legend;
pub mod nav;
pub mod not_found;
pub mod roadmap;
pub mod vr_game;
