use leptos::*;

use super::common::{ErrorBanner, LoadingCard};
use crate::api::ApiClient;
use crate::models::bon_achat::format_montant;
use crate::models::{BonAchat, ProduitBonAchat, VersementBonAchat};

/// Purchase order list page. Selecting an order expands its product
/// lines and recorded payments below the table.
#[component]
pub fn BonAchats() -> impl IntoView {
    let api = ApiClient::new();

    let (trigger, set_trigger) = create_signal(0);
    let bons = create_local_resource(
        move || trigger.get(),
        move |_| {
            let api = api.clone();
            async move { api.get_bon_achats().await }
        },
    );

    let refresh = move |_| set_trigger.update(|n| *n += 1);

    // Currently expanded order, if any
    let (selected, set_selected) = create_signal(None::<i64>);

    view! {
        <div class="page">
            <div class="page-header">
                <h2>"Bons d'achats"</h2>
                <button class="refresh-button" on:click=refresh>
                    "Actualiser"
                </button>
            </div>

            <Suspense fallback=move || view! { <LoadingCard title="Bons d'achats" /> }>
                {move || {
                    bons.get().map(|result| match result {
                        Ok(list) if list.is_empty() => {
                            view! { <div class="no-data">"Aucun bon d'achat enregistré"</div> }
                                .into_view()
                        }
                        Ok(list) => {
                            view! { <BonAchatsTable bons=list set_selected=set_selected /> }
                                .into_view()
                        }
                        Err(e) => view! { <ErrorBanner error=e /> }.into_view(),
                    })
                }}
            </Suspense>

            {move || selected.get().map(|bon_id| view! { <BonAchatDetail bon_id=bon_id /> })}
        </div>
    }
}

#[component]
fn BonAchatsTable(bons: Vec<BonAchat>, set_selected: WriteSignal<Option<i64>>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Date"</th>
                    <th>"Fournisseur"</th>
                    <th>"Montant total"</th>
                    <th>"Montant versé"</th>
                    <th>"Reste"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || bons.clone()
                    key=|bon| bon.id
                    children=move |bon| {
                        let id = bon.id;
                        let toggle = move |_| {
                            set_selected.update(|sel| {
                                *sel = if *sel == Some(id) { None } else { Some(id) };
                            });
                        };
                        let reste_class = if bon.solde() { "amount" } else { "amount amount-due" };
                        view! {
                            <tr class="row-link" on:click=toggle>
                                <td>{bon.date_display()}</td>
                                <td>{bon.fournisseur.clone()}</td>
                                <td class="amount">{format_montant(bon.montant_total)}</td>
                                <td class="amount">{format_montant(bon.montant_verse)}</td>
                                <td class=reste_class>{format_montant(bon.reste())}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}

/// Product lines and payments of one order
#[component]
fn BonAchatDetail(bon_id: i64) -> impl IntoView {
    let api = ApiClient::new();
    let api_versements = api.clone();

    let produits = create_local_resource(
        move || bon_id,
        move |id| {
            let api = api.clone();
            async move { api.get_bon_achat_produits(id).await }
        },
    );

    let versements = create_local_resource(
        move || bon_id,
        move |id| {
            let api = api_versements.clone();
            async move { api.get_bon_achat_versements(id).await }
        },
    );

    view! {
        <div class="catalogue-grid detail-grid">
            <Suspense fallback=move || view! { <LoadingCard title="Produits" /> }>
                {move || {
                    produits.get().map(|result| match result {
                        Ok(lines) => view! { <ProduitsLignes lines=lines /> }.into_view(),
                        Err(e) => view! { <ErrorBanner error=e /> }.into_view(),
                    })
                }}
            </Suspense>

            <Suspense fallback=move || view! { <LoadingCard title="Versements" /> }>
                {move || {
                    versements.get().map(|result| match result {
                        Ok(list) => view! { <VersementsLignes versements=list /> }.into_view(),
                        Err(e) => view! { <ErrorBanner error=e /> }.into_view(),
                    })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ProduitsLignes(lines: Vec<ProduitBonAchat>) -> impl IntoView {
    view! {
        <div class="card">
            <h3>"Produits"</h3>
            <ul class="catalogue-list">
                {lines
                    .into_iter()
                    .map(|line| {
                        let total = format_montant(line.qte * line.prix);
                        view! {
                            <li>
                                {line.produit}
                                <span class="amount">{format!("x{}", line.qte)}</span>
                                <span class="amount">{total}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn VersementsLignes(versements: Vec<VersementBonAchat>) -> impl IntoView {
    if versements.is_empty() {
        return view! { <div class="card"><h3>"Versements"</h3><div class="no-data">"Aucun versement"</div></div> }
            .into_view();
    }

    view! {
        <div class="card">
            <h3>"Versements"</h3>
            <ul class="catalogue-list">
                {versements
                    .into_iter()
                    .map(|v| {
                        let kind = v.kind.unwrap_or_default();
                        view! {
                            <li>
                                {kind}
                                <span class="amount">{format_montant(v.montant)}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
    .into_view()
}
