use leptos::*;

use super::common::{ErrorBanner, LoadingCard};
use crate::api::ApiClient;
use crate::models::{Client, Regime};

/// Delivery-note tracking for flat-rate clients: who collects where.
#[component]
pub fn BonsPassageForfait() -> impl IntoView {
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
                <h2>"Bons de Passage Forfait"</h2>
                <button class="refresh-button" on:click=refresh>
                    "Actualiser"
                </button>
            </div>

            <Suspense fallback=move || view! { <LoadingCard title="Bons de Passage Forfait" /> }>
                {move || {
                    clients.get().map(|result| match result {
                        Ok(list) => {
                            let forfait: Vec<Client> = list
                                .into_iter()
                                .filter(|c| c.regime() == Some(Regime::Forfait))
                                .collect();
                            if forfait.is_empty() {
                                view! {
                                    <div class="no-data">"Aucun client au forfait"</div>
                                }
                                    .into_view()
                            } else {
                                view! { <PassagesTable clients=forfait /> }.into_view()
                            }
                        }
                        Err(e) => view! { <ErrorBanner error=e /> }.into_view(),
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn PassagesTable(clients: Vec<Client>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Client"</th>
                    <th>"Spécialité"</th>
                    <th>"Agent"</th>
                    <th>"Téléphone"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || clients.clone()
                    key=|client| client.id
                    children=move |client| view! {
                        <tr>
                            <td>{client.nom}</td>
                            <td>{client.specialite.unwrap_or_default()}</td>
                            <td>{client.agent.unwrap_or_default()}</td>
                            <td>{client.tel.unwrap_or_default()}</td>
                        </tr>
                    }
                />
            </tbody>
        </table>
    }
}
