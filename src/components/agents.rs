use leptos::*;

use super::common::{ErrorBanner, LoadingCard};
use crate::api::ApiClient;
use crate::models::Agent;

/// Agent list page
#[component]
pub fn Agents() -> impl IntoView {
    let api = ApiClient::new();

    let (trigger, set_trigger) = create_signal(0);
    let agents = create_local_resource(
        move || trigger.get(),
        move |_| {
            let api = api.clone();
            async move { api.get_agents().await }
        },
    );

    let refresh = move |_| set_trigger.update(|n| *n += 1);

    view! {
        <div class="page">
            <div class="page-header">
                <h2>"Agents"</h2>
                <button class="refresh-button" on:click=refresh>
                    "Actualiser"
                </button>
            </div>

            <Suspense fallback=move || view! { <LoadingCard title="Agents" /> }>
                {move || {
                    agents.get().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <div class="no-data">"Aucun agent enregistré"</div> }
                                .into_view()
                        }
                        Ok(list) => view! { <AgentsTable agents=list /> }.into_view(),
                        Err(e) => view! { <ErrorBanner error=e /> }.into_view(),
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn AgentsTable(agents: Vec<Agent>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Nom"</th>
                    <th>"Téléphone"</th>
                    <th>"WhatsApp"</th>
                    <th>"Régime"</th>
                    <th>"Notification"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || agents.clone()
                    key=|agent| agent.id
                    children=move |agent| {
                        let regime = agent.regime().map(|r| r.as_str()).unwrap_or("—");
                        view! {
                            <tr>
                                <td>{agent.nom}</td>
                                <td>{agent.telephone.unwrap_or_default()}</td>
                                <td>{agent.whatsapp.unwrap_or_default()}</td>
                                <td><span class="badge">{regime}</span></td>
                                <td>{agent.notification.unwrap_or_default()}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
