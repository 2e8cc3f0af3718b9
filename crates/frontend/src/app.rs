use crate::system::location::LocationProvider;
use crate::usecases::u601_fetch_deals::HomePage;
use crate::usecases::u602_import_menus::AdminImportPanel;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let (show_admin, set_show_admin) = signal(false);

    view! {
        <LocationProvider>
            <nav class="navbar">
                <span class="navbar__brand gradient-text">"BiteRank"</span>
                <button
                    class="button button--secondary"
                    on:click=move |_| set_show_admin.update(|v| *v = !*v)
                >
                    {move || if show_admin.get() { "Deals" } else { "Admin" }}
                </button>
            </nav>
            <main class="app-main">
                <Show when=move || show_admin.get() fallback=|| view! { <HomePage /> }>
                    <AdminImportPanel />
                </Show>
            </main>
        </LocationProvider>
    }
}
