use leptos::*;

use crate::api::ApiError;

/// Loading placeholder card
#[component]
pub fn LoadingCard(title: &'static str) -> impl IntoView {
    view! {
        <div class="card">
            <h3>{title}</h3>
            <div class="loading">"Chargement..."</div>
        </div>
    }
}

/// Error banner shown when a fetch fails
#[component]
pub fn ErrorBanner(error: ApiError) -> impl IntoView {
    view! {
        <div class="error-banner">
            <strong>"Erreur de chargement:"</strong>
            <div>{format!("{}", error)}</div>
        </div>
    }
}
