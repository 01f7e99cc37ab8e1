use leptos::*;
use leptos_router::A;

/// Shown for any path outside the route table
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found">
            <h2>"Page introuvable"</h2>
            <p>"L'adresse demandée ne correspond à aucune page."</p>
            <A href="/dashboard" class="back-home-link">
                "Retour au tableau de bord"
            </A>
        </div>
    }
}
