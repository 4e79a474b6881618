use leptos::prelude::*;

use super::legend::Legend;
use super::nav::NavBar;
use crate::components::constellation::{ConstellationCanvas, NodeRecord};
use crate::components::overlay::{DetailOverlay, DetailState};
use crate::content::FINAL_PROJECT;

/// Final project constellation with the research detail slides.
#[component]
pub fn Home() -> impl IntoView {
	let nodes: &'static [NodeRecord] = &FINAL_PROJECT;
	let detail = RwSignal::new(DetailState::default());
	let hovered = RwSignal::new(None::<&'static str>);

	view! {
		<div class="constellation-page">
			<ConstellationCanvas nodes=nodes detail=detail hovered=hovered />
			<NavBar />
			<Show when=move || !detail.with(DetailState::is_open)>
				<aside class="instructions">
					<h3>"Explora el Roadmap"</h3>
					<p>"Mueve el mouse cerca de las estrellas para revelar conexiones."</p>
					<p>"Haz clic en los nodos azules y amarillos para ver detalles de cada fase."</p>
				</aside>
			</Show>
			<Legend nodes=nodes hovered=hovered />
			<DetailOverlay nodes=nodes detail=detail />
		</div>
	}
}
