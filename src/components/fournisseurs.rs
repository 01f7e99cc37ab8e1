use leptos::*;

use super::common::{ErrorBanner, LoadingCard};
use crate::api::ApiClient;
use crate::models::Fournisseur;

/// Supplier list page
#[component]
pub fn Fournisseurs() -> impl IntoView {
    let api = ApiClient::new();

    let (trigger, set_trigger) = create_signal(0);
    let fournisseurs = create_local_resource(
        move || trigger.get(),
        move |_| {
            let api = api.clone();
            async move { api.get_fournisseurs().await }
        },
    );

    let refresh = move |_| set_trigger.update(|n| *n += 1);

    view! {
        <div class="page">
            <div class="page-header">
                <h2>"Fournisseurs"</h2>
                <button class="refresh-button" on:click=refresh>
                    "Actualiser"
                </button>
            </div>

            <Suspense fallback=move || view! { <LoadingCard title="Fournisseurs" /> }>
                {move || {
                    fournisseurs.get().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <div class="no-data">"Aucun fournisseur enregistré"</div> }
                                .into_view()
                        }
                        Ok(list) => view! { <FournisseursTable fournisseurs=list /> }.into_view(),
                        Err(e) => view! { <ErrorBanner error=e /> }.into_view(),
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn FournisseursTable(fournisseurs: Vec<Fournisseur>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Nom"</th>
                    <th>"Téléphone"</th>
                    <th>"Adresse"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || fournisseurs.clone()
                    key=|f| f.id
                    children=move |f| view! {
                        <tr>
                            <td>{f.nom}</td>
                            <td>{f.telephone.unwrap_or_default()}</td>
                            <td>{f.adresse.unwrap_or_default()}</td>
                        </tr>
                    }
                />
            </tbody>
        </table>
    }
}
