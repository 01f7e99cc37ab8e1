use leptos::*;

use super::common::{ErrorBanner, LoadingCard};
use crate::api::ApiClient;
use crate::models::{Client, Regime};

/// Payment tracking for flat-rate clients. The backend keeps payment
/// state on the client contract, so this view is the forfait slice of
/// the client list.
#[component]
pub fn VersementsForfait() -> impl IntoView {
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
                <h2>"Versements Forfait"</h2>
                <button class="refresh-button" on:click=refresh>
                    "Actualiser"
                </button>
            </div>

            <Suspense fallback=move || view! { <LoadingCard title="Versements Forfait" /> }>
                {move || {
                    clients.get().map(|result| match result {
                        Ok(list) => {
                            let forfait = forfait_clients(list);
                            if forfait.is_empty() {
                                view! {
                                    <div class="no-data">"Aucun client au forfait"</div>
                                }
                                    .into_view()
                            } else {
                                view! { <VersementsTable clients=forfait /> }.into_view()
                            }
                        }
                        Err(e) => view! { <ErrorBanner error=e /> }.into_view(),
                    })
                }}
            </Suspense>
        </div>
    }
}

/// Keep only clients managed under the flat-rate regime
fn forfait_clients(clients: Vec<Client>) -> Vec<Client> {
    clients
        .into_iter()
        .filter(|c| c.regime() == Some(Regime::Forfait))
        .collect()
}

#[component]
fn VersementsTable(clients: Vec<Client>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Client"</th>
                    <th>"Agent"</th>
                    <th>"État du contrat"</th>
                    <th>"Début"</th>
                    <th>"Fin"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || clients.clone()
                    key=|client| client.id
                    children=move |client| {
                        let debut = client.debut_contrat_display().unwrap_or_default();
                        let fin = client.fin_contrat_display().unwrap_or_default();
                        view! {
                            <tr>
                                <td>{client.nom}</td>
                                <td>{client.agent.unwrap_or_default()}</td>
                                <td>{client.etat_contrat.unwrap_or_default()}</td>
                                <td>{debut}</td>
                                <td>{fin}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(id: i64, mode: Option<&str>) -> Client {
        Client {
            id,
            nom: format!("Client {id}"),
            specialite: None,
            tel: None,
            mode: mode.map(str::to_string),
            agent: None,
            etat_contrat: None,
            debut_contrat: None,
            fin_contrat: None,
        }
    }

    #[test]
    fn keeps_forfait_clients_only() {
        let all = vec![
            client(1, Some("Forfait")),
            client(2, Some("Réel")),
            client(3, None),
            client(4, Some("Forfait")),
        ];

        let forfait = forfait_clients(all);
        let ids: Vec<i64> = forfait.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }
}
