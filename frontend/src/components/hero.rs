//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Wood Defect Detection"</h1>
            <p class="subtitle">
                "Upload photos of wooden objects and get a defect verdict with an explanation for each image."
            </p>
        </div>
    }
}
