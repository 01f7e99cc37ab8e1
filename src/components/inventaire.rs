use leptos::*;

use super::common::{ErrorBanner, LoadingCard};
use crate::api::ApiClient;
use crate::models::bon_achat::format_montant;
use crate::models::InventaireItem;

/// Stock page. Quantities move whenever a purchase order is recorded,
/// so the list refetches periodically on top of the manual refresh.
#[component]
pub fn Inventaire() -> impl IntoView {
    let api = ApiClient::new();

    let (trigger, set_trigger) = create_signal(0);
    let inventaire = create_local_resource(
        move || trigger.get(),
        move |_| {
            let api = api.clone();
            async move { api.get_inventaire().await }
        },
    );

    let refresh = move |_| set_trigger.update(|n| *n += 1);

    // Refetch every 60 seconds
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_timers::callback::Interval;

        let interval = Interval::new(60_000, move || {
            set_trigger.update(|n| *n += 1);
        });

        on_cleanup(move || drop(interval));
    }

    view! {
        <div class="page">
            <div class="page-header">
                <h2>"Inventaire"</h2>
                <button class="refresh-button" on:click=refresh>
                    "Actualiser"
                </button>
            </div>

            <Suspense fallback=move || view! { <LoadingCard title="Inventaire" /> }>
                {move || {
                    inventaire.get().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <div class="no-data">"Stock vide"</div> }.into_view()
                        }
                        Ok(list) => view! { <InventaireTable items=list /> }.into_view(),
                        Err(e) => view! { <ErrorBanner error=e /> }.into_view(),
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn InventaireTable(items: Vec<InventaireItem>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Produit"</th>
                    <th>"Quantité"</th>
                    <th>"Dernier prix"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || items.clone()
                    key=|item| item.id
                    children=move |item| {
                        let prix = item
                            .prix_dernier
                            .map(format_montant)
                            .unwrap_or_else(|| "—".to_string());
                        view! {
                            <tr>
                                <td>{item.produit.clone()}</td>
                                <td class="amount">{item.qte}</td>
                                <td class="amount">{prix}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
