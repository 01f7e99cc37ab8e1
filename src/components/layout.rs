use leptos::*;
use leptos_router::{use_location, use_navigate, Outlet};

use crate::navigation::{back_destination, shows_back_button};
use crate::state::{use_theme, Theme};

/// Layout component with header chrome and content outlet
#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <div class="layout">
            <Header />
            <main class="main-content">
                <Outlet />
            </main>
        </div>
    }
}

/// Header bar with the company name, theme toggle and back button
#[component]
fn Header() -> impl IntoView {
    let location = use_location();

    // The back button is hidden on the dashboard only
    let show_back = move || shows_back_button(&location.pathname.get());

    view! {
        <header class="header">
            <div class="header-content">
                <h1 class="header-title">"VITALECOSYSTEM"</h1>
                <div class="header-actions">
                    <ThemeToggle />
                    <Show when=show_back fallback=|| ()>
                        <BackButton />
                    </Show>
                </div>
            </div>
        </header>
    }
}

/// RETOUR button; its destination depends on the current path
#[component]
fn BackButton() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    let on_back = move |_| {
        let dest = back_destination(&location.pathname.get_untracked());
        navigate(dest, Default::default());
    };

    view! {
        <button class="back-button" on:click=on_back>
            <span class="back-arrow" aria-hidden="true">"←"</span>
            " RETOUR"
        </button>
    }
}

/// Theme toggle button
#[component]
fn ThemeToggle() -> impl IntoView {
    let theme_ctx = use_theme();

    let icon = move || {
        match theme_ctx.theme.get() {
            Theme::Light => "Sombre", // Show what clicking will do
            Theme::Dark => "Clair",
        }
    };

    view! {
        <button
            class="theme-toggle"
            aria-label="Toggle theme"
            on:click=move |_| theme_ctx.toggle()
        >
            {icon}
        </button>
    }
}
