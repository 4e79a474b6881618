use leptos::prelude::*;

use crate::components::constellation::{NodeRecord, NodeStatus};

/// Status key plus one entry per node; the entry under the pointer is
/// highlighted.
#[component]
pub fn Legend(nodes: &'static [NodeRecord], hovered: RwSignal<Option<&'static str>>) -> impl IntoView {
	let entries = nodes
		.iter()
		.map(|node| {
			let id = node.id;
			view! {
				<li class:hovered=move || hovered.get() == Some(id)>
					<span class=format!("legend-dot {}", node.status.css_class())></span>
					{node.title}
				</li>
			}
		})
		.collect_view();

	view! {
		<aside class="legend">
			<h4>"Leyenda"</h4>
			<div class="legend-key">
				<span class=format!("legend-dot {}", NodeStatus::Completed.css_class())></span>
				"Fase Completada"
			</div>
			<div class="legend-key">
				<span class=format!("legend-dot {}", NodeStatus::InProgress.css_class())></span>
				"En Progreso"
			</div>
			<ul class="legend-nodes">{entries}</ul>
		</aside>
	}
}
