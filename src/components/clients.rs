use leptos::*;
use leptos_router::use_navigate;

use super::common::{ErrorBanner, LoadingCard};
use crate::api::ApiClient;
use crate::models::Client;

/// Client list page
#[component]
pub fn Clients() -> impl IntoView {
    let api = ApiClient::new();

    let (trigger, set_trigger) = create_signal(0);
    let clients = create_local_resource(
        move || trigger.get(),
        move |_| {
            let api = api.clone();
            async move { api.get_clients().await }
        },
    );

    let refresh = move |_| set_trigger.update(|n| *n += 1);

    view! {
        <div class="page">
            <div class="page-header">
                <h2>"Clients"</h2>
                <button class="refresh-button" on:click=refresh>
                    "Actualiser"
                </button>
            </div>

            <Suspense fallback=move || view! { <LoadingCard title="Clients" /> }>
                {move || {
                    clients.get().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <div class="no-data">"Aucun client enregistré"</div> }
                                .into_view()
                        }
                        Ok(list) => view! { <ClientsTable clients=list /> }.into_view(),
                        Err(e) => view! { <ErrorBanner error=e /> }.into_view(),
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ClientsTable(clients: Vec<Client>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Nom"</th>
                    <th>"Spécialité"</th>
                    <th>"Téléphone"</th>
                    <th>"Mode"</th>
                    <th>"Agent"</th>
                    <th>"État contrat"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || clients.clone()
                    key=|client| client.id
                    children=move |client| view! { <ClientRow client=client /> }
                />
            </tbody>
        </table>
    }
}

/// One client row; clicking opens the client profile
#[component]
fn ClientRow(client: Client) -> impl IntoView {
    let navigate = use_navigate();
    let id = client.id;
    let open_profile = move |_| {
        navigate(&format!("/clients/{}", id), Default::default());
    };

    let regime = client.regime().map(|r| r.as_str()).unwrap_or("—");

    view! {
        <tr class="row-link" on:click=open_profile>
            <td>{client.nom}</td>
            <td>{client.specialite.unwrap_or_default()}</td>
            <td>{client.tel.unwrap_or_default()}</td>
            <td><span class="badge">{regime}</span></td>
            <td>{client.agent.unwrap_or_default()}</td>
            <td>{client.etat_contrat.unwrap_or_default()}</td>
        </tr>
    }
}
