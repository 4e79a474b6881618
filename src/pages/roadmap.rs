use leptos::prelude::*;

use super::legend::Legend;
use super::nav::NavBar;
use crate::components::constellation::{ConstellationCanvas, ConstellationOptions, NodeRecord};
use crate::components::overlay::{DetailOverlay, DetailState};
use crate::content::VR_ROADMAP;

/// VR game roadmap: a wider, pannable constellation with node cards.
#[component]
pub fn Roadmap() -> impl IntoView {
	let nodes: &'static [NodeRecord] = &VR_ROADMAP;
	let detail = RwSignal::new(DetailState::default());
	let hovered = RwSignal::new(None::<&'static str>);
	let options = ConstellationOptions {
		star_count: 300,
		pan_extent: Some(0.3),
		cards: true,
	};

	view! {
		<div class="constellation-page roadmap">
			<ConstellationCanvas nodes=nodes detail=detail hovered=hovered options=options />
			<NavBar />
			<Show when=move || !detail.with(DetailState::is_open)>
				<aside class="instructions">
					<h3>"Roadmap VR"</h3>
					<p>"Arrastra para desplazarte por la constelación."</p>
					<p>"Haz clic en un nodo o en su tarjeta para ver detalles, feedback y videos."</p>
				</aside>
			</Show>
			<Legend nodes=nodes hovered=hovered />
			<DetailOverlay nodes=nodes detail=detail />
		</div>
	}
}
