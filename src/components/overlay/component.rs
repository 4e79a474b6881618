use leptos::ev;
use leptos::prelude::*;
use web_sys::{KeyboardEvent, MouseEvent, TouchEvent};

use super::slides::{DetailState, OverlayCommand, SlideKind, SwipeTracker, command_for_key};
use crate::components::constellation::NodeRecord;

/// Paginated detail view for the node selected in `detail`.
///
/// Arrow keys, the prev/next buttons, indicator dots and horizontal swipes
/// page through the slides; Escape, the close button or a click on the
/// backdrop clear the selection.
#[component]
pub fn DetailOverlay(nodes: &'static [NodeRecord], detail: RwSignal<DetailState>) -> impl IntoView {
	let swipe = StoredValue::new(SwipeTracker::default());

	let keys = window_event_listener(ev::keydown, move |ev: KeyboardEvent| {
		if !detail.with_untracked(DetailState::is_open) {
			return;
		}
		if let Some(command) = command_for_key(&ev.key()) {
			ev.prevent_default();
			detail.update(|d| d.apply(command));
		}
	});
	on_cleanup(move || keys.remove());

	move || {
		let state = detail.get();
		let node = state.selected().and_then(|i| nodes.get(i))?;
		let current = state.current().unwrap_or(SlideKind::Overview);
		let (total, active) = (state.slides().len(), state.index());

		let on_touchstart = move |ev: TouchEvent| {
			if let Some(touch) = ev.target_touches().get(0) {
				swipe.update_value(|s| s.begin(touch.client_x() as f64));
			}
		};
		let on_touchmove = move |ev: TouchEvent| {
			if let Some(touch) = ev.target_touches().get(0) {
				swipe.update_value(|s| s.track(touch.client_x() as f64));
			}
		};
		let on_touchend = move |_: TouchEvent| {
			let mut command = None;
			swipe.update_value(|s| command = s.finish());
			if let Some(command) = command {
				detail.update(|d| d.apply(command));
			}
		};

		Some(view! {
			<div
				class="detail-backdrop"
				on:click=move |_: MouseEvent| detail.update(DetailState::close)
			>
				<div
					class="detail-panel"
					on:click=|ev: MouseEvent| ev.stop_propagation()
					on:touchstart=on_touchstart
					on:touchmove=on_touchmove
					on:touchend=on_touchend
				>
					<header class="detail-header">
						<span class=format!("status-dot {}", node.status.css_class())></span>
						<h2>{current.title(node)}</h2>
						<button
							class="detail-close"
							aria-label="Cerrar"
							on:click=move |_: MouseEvent| detail.update(DetailState::close)
						>
							"×"
						</button>
					</header>
					<div class="detail-body">{slide_body(node, current)}</div>
					{(total > 1).then(|| slide_nav(detail, total, active))}
					<p class="detail-counter">
						{format!("Slide {} de {}", active + 1, total)}
						<span class="hint">" • Usa ← → o desliza para navegar"</span>
					</p>
				</div>
			</div>
		})
	}
}

fn slide_nav(detail: RwSignal<DetailState>, total: usize, active: usize) -> impl IntoView {
	let send = move |command: OverlayCommand| detail.update(|d| d.apply(command));
	let dots = (0..total)
		.map(|i| {
			let class = if i == active {
				"slide-dot active"
			} else {
				"slide-dot"
			};
			view! {
				<button
					class=class
					aria-label=format!("Ir a slide {}", i + 1)
					on:click=move |_: MouseEvent| send(OverlayCommand::GoTo(i))
				></button>
			}
		})
		.collect_view();

	view! {
		<nav class="slide-nav">
			<button class="slide-prev" on:click=move |_: MouseEvent| send(OverlayCommand::Previous)>
				"Anterior"
			</button>
			<div class="slide-dots">{dots}</div>
			<button class="slide-next" on:click=move |_: MouseEvent| send(OverlayCommand::Next)>
				"Siguiente"
			</button>
		</nav>
	}
}

fn slide_body(node: &'static NodeRecord, kind: SlideKind) -> AnyView {
	match kind {
		SlideKind::Overview => overview(node),
		SlideKind::Interviews => interviews(node),
		SlideKind::Questionnaires => questionnaires(node),
		SlideKind::Needs => needs(node),
		SlideKind::Feedback => feedback(node),
		SlideKind::Videos => videos(node),
	}
}

fn overview(node: &'static NodeRecord) -> AnyView {
	let video_link = node.video_link.filter(|_| node.videos.is_empty());
	view! {
		<div class="slide slide-overview">
			<div class="badges">
				<span class="badge phase">{node.phase}</span>
				{node.date.map(|date| view! { <span class="badge date">{date}</span> })}
				<span class=format!("badge {}", node.status.css_class())>{node.status.label()}</span>
			</div>
			{node.image.map(|src| view! { <img class="slide-image" src=src alt=node.title /> })}
			{video_link
				.map(|href| {
					view! {
						<a class="video-link" href=href target="_blank" rel="noopener noreferrer">
							"Ver Video"
						</a>
					}
				})}
			<p class="description">{node.description}</p>
			<h3>"Puntos Clave"</h3>
			<ul class="achievements">
				{node.achievements.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
			</ul>
		</div>
	}
	.into_any()
}

fn interviews(node: &'static NodeRecord) -> AnyView {
	let cards = node
		.interviews
		.iter()
		.map(|interview| {
			let avatar = match interview.image {
				Some(src) => {
					view! { <img class="avatar" src=src alt=format!("Foto de {}", interview.name) /> }
						.into_any()
				}
				None => view! { <div class="avatar avatar-fallback">{interview.initial()}</div> }
					.into_any(),
			};
			view! {
				<article class="interview-card">
					{avatar}
					<div class="interview-text">
						<h4>{interview.name}</h4>
						<p class="profile">{interview.profile}</p>
						<p class="summary">{interview.description}</p>
					</div>
					<a href=interview.link target="_blank" rel="noopener noreferrer">
						"Ver Entrevista"
					</a>
				</article>
			}
		})
		.collect_view();
	view! { <div class="slide slide-interviews">{cards}</div> }.into_any()
}

fn questionnaires(node: &'static NodeRecord) -> AnyView {
	let cards = node
		.questionnaires
		.iter()
		.map(|questionnaire| {
			let sections = questionnaire
				.sections
				.iter()
				.map(|section| {
					view! {
						<section class="question-section">
							{section.title.map(|title| view! { <h4>{title}</h4> })}
							<ul>
								{section
									.questions
									.iter()
									.map(|q| view! { <li>{*q}</li> })
									.collect_view()}
							</ul>
						</section>
					}
				})
				.collect_view();
			view! {
				<article class="questionnaire-card">
					<header>
						<h3>{questionnaire.title}</h3>
						<span class="badge audience">{questionnaire.audience}</span>
					</header>
					{sections}
				</article>
			}
		})
		.collect_view();
	view! { <div class="slide slide-questionnaires">{cards}</div> }.into_any()
}

fn needs(node: &'static NodeRecord) -> AnyView {
	let items = node
		.needs
		.iter()
		.map(|need| {
			view! {
				<article class="need-card">
					<div class="need-number">{need.number}</div>
					<p>
						<strong>{format!("Need #{}: ", need.number)}</strong>
						{need.description}
					</p>
				</article>
			}
		})
		.collect_view();
	view! { <div class="slide slide-needs">{items}</div> }.into_any()
}

fn feedback(node: &'static NodeRecord) -> AnyView {
	let sections = node
		.feedback
		.iter()
		.map(|section| {
			view! {
				<section class="feedback-section">
					<h4>{section.title}</h4>
					<ul>
						{section
							.recommendations
							.iter()
							.map(|rec| view! { <li>{*rec}</li> })
							.collect_view()}
					</ul>
				</section>
			}
		})
		.collect_view();
	view! { <div class="slide slide-feedback">{sections}</div> }.into_any()
}

fn videos(node: &'static NodeRecord) -> AnyView {
	let players = node
		.videos
		.iter()
		.map(|video| {
			view! {
				<figure class="video">
					<figcaption>{video.title}</figcaption>
					<iframe
						src=video.embed_url()
						title=video.title
						allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
						allowfullscreen=true
					></iframe>
					<a href=video.url target="_blank" rel="noopener noreferrer">
						"Abrir en YouTube"
					</a>
				</figure>
			}
		})
		.collect_view();
	view! { <div class="slide slide-videos">{players}</div> }.into_any()
}
