use leptos::*;
use leptos_router::use_params_map;
use thiserror::Error;

use super::common::{ErrorBanner, LoadingCard};
use crate::api::ApiClient;
use crate::models::Client;

/// Raised when the `:id` segment of /clients/:id is not a client id.
/// Propagates to the root error boundary.
#[derive(Error, Debug, Clone)]
#[error("Identifiant client invalide: {0:?}")]
pub struct InvalidClientId(String);

/// Client profile page, bound to /clients/:id
#[component]
pub fn ClientProfile() -> impl IntoView {
    let params = use_params_map();

    let client_id = move || -> Result<i64, InvalidClientId> {
        let raw = params.with(|p| p.get("id").cloned().unwrap_or_default());
        raw.parse::<i64>().map_err(|_| InvalidClientId(raw))
    };

    view! {
        <div class="page">
            {move || client_id().map(|id| view! { <ClientDetails client_id=id /> })}
        </div>
    }
}

#[component]
fn ClientDetails(client_id: i64) -> impl IntoView {
    let api = ApiClient::new();

    let client = create_local_resource(
        move || client_id,
        move |id| {
            let api = api.clone();
            async move { api.get_client(id).await }
        },
    );

    view! {
        <Suspense fallback=move || view! { <LoadingCard title="Profil client" /> }>
            {move || {
                client.get().map(|result| match result {
                    Ok(client) => view! { <ProfileCard client=client /> }.into_view(),
                    Err(e) => view! { <ErrorBanner error=e /> }.into_view(),
                })
            }}
        </Suspense>
    }
}

#[component]
fn ProfileCard(client: Client) -> impl IntoView {
    let regime = client.regime().map(|r| r.as_str()).unwrap_or("—");
    let debut = client.debut_contrat_display();
    let fin = client.fin_contrat_display();

    view! {
        <div class="card profile-card">
            <h2>{client.nom}</h2>
            <dl class="profile-fields">
                <dt>"Spécialité"</dt>
                <dd>{client.specialite.unwrap_or_default()}</dd>
                <dt>"Téléphone"</dt>
                <dd>{client.tel.unwrap_or_default()}</dd>
                <dt>"Mode"</dt>
                <dd><span class="badge">{regime}</span></dd>
                <dt>"Agent"</dt>
                <dd>{client.agent.unwrap_or_default()}</dd>
                <dt>"État du contrat"</dt>
                <dd>{client.etat_contrat.unwrap_or_default()}</dd>
                <dt>"Début du contrat"</dt>
                <dd>{debut.unwrap_or_default()}</dd>
                <dt>"Fin du contrat"</dt>
                <dd>{fin.unwrap_or_default()}</dd>
            </dl>
        </div>
    }
}
