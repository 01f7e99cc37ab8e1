use leptos::*;

/// Root supervisory wrapper. Healthy renders pass children through;
/// once any descendant renders an error the whole tree is replaced by
/// the fallback screen. There is no recovery short of a full reload.
#[component]
pub fn AppErrorBoundary(children: Children) -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| {
            for (_, error) in errors.get_untracked().into_iter() {
                log::error!("Rendering error: {error}");
            }

            view! {
                <div class="error-screen">
                    <h2>"Une erreur est survenue"</h2>
                    <button class="reload-button" on:click=|_| reload_page()>
                        "Rafraîchir la page"
                    </button>
                </div>
            }
        }>
            {children()}
        </ErrorBoundary>
    }
}

/// Full page reload, discarding all in-memory UI state
fn reload_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}
