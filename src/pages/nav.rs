use leptos::prelude::*;
use leptos_router::components::A;

/// Links between the three project views.
#[component]
pub fn NavBar() -> impl IntoView {
	view! {
		<nav class="site-nav">
			<A href="/">"Proyecto Final"</A>
			<A href="/roadmap">"Roadmap VR"</A>
			<A href="/vr-game">"Worst Nightmare"</A>
		</nav>
	}
}
