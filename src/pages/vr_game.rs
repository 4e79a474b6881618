use leptos::prelude::*;
use leptos_router::components::A;

use super::nav::NavBar;
use crate::components::constellation::NodeRecord;
use crate::components::rocks::RockCanvas;
use crate::content::VR_GAME_PHASES;

/// Game concept page: draggable rocks behind the development timeline.
#[component]
pub fn VrGame() -> impl IntoView {
	let selected = RwSignal::new(0usize);

	let phase_buttons = VR_GAME_PHASES
		.iter()
		.enumerate()
		.map(|(i, phase)| {
			view! {
				<button
					class=format!("phase-node {}", phase.status.css_class())
					class:selected=move || selected.get() == i
					style=format!("left: {}%;", phase.x * 100.0)
					on:click=move |_| selected.set(i)
				>
					<span class="phase-number">{phase.id}</span>
					<span class="phase-date">{phase.date}</span>
					<span class="phase-label">{phase.phase}</span>
				</button>
			}
		})
		.collect_view();

	view! {
		<div class="vr-game-page">
			<RockCanvas />
			<NavBar />
			<main class="vr-game-content">
				<header class="game-intro">
					<h2>"Worst Nightmare"</h2>
					<p class="tagline">"Una experiencia de realidad virtual inmersiva terapéutica"</p>
					<section class="concept">
						<h3>"Concepto Central"</h3>
						<p>
							"Una experiencia VR que utiliza interacciones multimodales (gestos, movimiento) para guiar al usuario a través de tres niveles oníricos. El objetivo es enfrentar y re-contextualizar sentimientos de ansiedad, soledad y el hábito de \"terribilizar\"."
						</p>
						<div class="concept-columns">
							<div>
								<h4>"Problemas que Aborda:"</h4>
								<ul>
									<li>"Dificultad para tomar decisiones"</li>
									<li>"Gestión de pensamientos catastróficos"</li>
									<li>"Ansiedad y soledad"</li>
								</ul>
							</div>
							<div>
								<h4>"Usuarios Objetivo:"</h4>
								<ul>
									<li>"Pacientes en contextos terapéuticos"</li>
									<li>"Psicólogos y profesionales"</li>
									<li>"Adolescentes y adultos"</li>
								</ul>
							</div>
						</div>
					</section>
					<p class="hint">"Arrastra y suelta las rocas para lanzarlas."</p>
				</header>

				<section class="timeline">
					<h3>"Proceso de Desarrollo"</h3>
					<p>"Selecciona una fase para ver los detalles"</p>
					<div class="phase-track">{phase_buttons}</div>
					{move || VR_GAME_PHASES.get(selected.get()).map(phase_details)}
					<A href="/roadmap">"Ver el roadmap completo"</A>
				</section>
			</main>
		</div>
	}
}

fn phase_details(phase: &'static NodeRecord) -> impl IntoView {
	view! {
		<article class="phase-details">
			{phase.image.map(|src| view! { <img src=src alt=phase.title /> })}
			<div class="phase-text">
				<div class="badges">
					<span class="badge date">{phase.date}</span>
					<span class=format!("badge {}", phase.status.css_class())>{phase.status.label()}</span>
				</div>
				<h3>{phase.title}</h3>
				<p class="phase">{phase.phase}</p>
				<p class="description">{phase.description}</p>
				<h4>"Logros Clave:"</h4>
				<ul>{phase.achievements.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}</ul>
			</div>
		</article>
	}
}
