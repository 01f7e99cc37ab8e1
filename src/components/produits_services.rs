use leptos::*;

use super::common::{ErrorBanner, LoadingCard};
use crate::api::ApiClient;
use crate::models::{Produit, Service};

/// Products & services catalogue page
#[component]
pub fn ProduitsServices() -> impl IntoView {
    let api = ApiClient::new();
    let api_services = api.clone();

    let produits = create_local_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { api.get_produits().await }
        },
    );

    let services = create_local_resource(
        || (),
        move |_| {
            let api = api_services.clone();
            async move { api.get_services().await }
        },
    );

    view! {
        <div class="page">
            <h2>"Produits & Services"</h2>

            <div class="catalogue-grid">
                <Suspense fallback=move || view! { <LoadingCard title="Produits" /> }>
                    {move || {
                        produits.get().map(|result| match result {
                            Ok(list) => view! { <ProduitsCard produits=list /> }.into_view(),
                            Err(e) => view! { <ErrorBanner error=e /> }.into_view(),
                        })
                    }}
                </Suspense>

                <Suspense fallback=move || view! { <LoadingCard title="Services" /> }>
                    {move || {
                        services.get().map(|result| match result {
                            Ok(list) => view! { <ServicesCard services=list /> }.into_view(),
                            Err(e) => view! { <ErrorBanner error=e /> }.into_view(),
                        })
                    }}
                </Suspense>
            </div>
        </div>
    }
}

#[component]
fn ProduitsCard(produits: Vec<Produit>) -> impl IntoView {
    view! {
        <div class="card">
            <h3>"Produits"</h3>
            <ul class="catalogue-list">
                {produits
                    .into_iter()
                    .map(|p| view! { <li>{p.designation}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn ServicesCard(services: Vec<Service>) -> impl IntoView {
    view! {
        <div class="card">
            <h3>"Services"</h3>
            <ul class="catalogue-list">
                {services
                    .into_iter()
                    .map(|s| {
                        let incineration = s.incineration.unwrap_or(false);
                        view! {
                            <li>
                                {s.designation}
                                {incineration.then(|| view! {
                                    <span class="badge badge-muted">"Incinération"</span>
                                })}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
