use leptos::*;
use leptos_router::*;

use crate::components::{
    Agents, AppErrorBoundary, BonAchats, BonsPassageForfait, ClientProfile, Clients, Dashboard,
    Fournisseurs, Inventaire, Layout, NotFound, ProduitsServices, SubMenu, VersementsForfait,
};
use crate::state::provide_theme_context;

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    // Provide theme context at the app root
    provide_theme_context();

    view! {
        <AppErrorBoundary>
            <Router>
                <Routes>
                    <Route path="/" view=Layout>
                        <Route path="" view=|| view! { <Redirect path="/dashboard" /> } />
                        <Route path="dashboard" view=Dashboard />
                        <Route path="clients" view=Clients />
                        <Route path="clients/:id" view=ClientProfile />
                        <Route path="agents-list" view=Agents />
                        <Route
                            path="regime-forfait"
                            view=|| view! { <SubMenu title="Régime Forfait" /> }
                        />
                        <Route
                            path="regime-réel"
                            view=|| view! { <SubMenu title="Régime Réel" /> }
                        />
                        <Route path="achats" view=|| view! { <SubMenu title="Achats" /> } />
                        <Route path="agents" view=Agents />
                        <Route path="produits-services" view=ProduitsServices />
                        <Route path="inventaire" view=Inventaire />
                        <Route path="fournisseurs" view=Fournisseurs />
                        <Route path="bon-achats" view=BonAchats />
                        <Route path="versements-forfait" view=VersementsForfait />
                        <Route path="bons-passage-forfait" view=BonsPassageForfait />
                        <Route path="*any" view=NotFound />
                    </Route>
                </Routes>
            </Router>
        </AppErrorBoundary>
    }
}
