//! Page header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="hero">
            <p class="eyebrow">"MLPDR"</p>
            <h1>"Moroccan Plate Detection & Recognition"</h1>
            <p class="subtitle">
                "Upload a car photo; the service finds the plate and reads it."
            </p>
        </header>
    }
}
