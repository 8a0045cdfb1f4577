use leptos::*;
use crate::state::ViewState;

/// Spinner shown while a batch is being analyzed.
#[component]
pub fn LoadingIndicator(state: RwSignal<ViewState>) -> impl IntoView {
    view! {
        <Show
            when=move || state.with(|s| s.is_uploading)
            fallback=|| view! { }
        >
            <div class="loading" role="status">
                <div class="spinner"></div>
                <p>"Analyzing images..."</p>
            </div>
        </Show>
    }
}
