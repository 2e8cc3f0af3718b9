use contracts::domain::a001_deal::DealsQuery;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u602_import_menus::{ImportMenus, ScrapeImportParams};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api;
use crate::shared::components::ImportProgressOverlay;
use crate::shared::api_utils::api_base;
use crate::shared::config::app_config;
use crate::shared::import_job::{
    CachePolicy, DealsReader, GlooSleeper, ImportOrchestrator, LocalProgress, RunOutcome,
};
use crate::shared::storage::LocalStorageStore;
use crate::system::location::use_location;
use crate::usecases::u601_fetch_deals::api::{HttpDealsReader, HttpJobApi};

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn AdminImportPanel() -> impl IntoView {
    let config = app_config();
    let location = use_location().location;

    let (importing, set_importing) = signal(false);
    let (importing_uber, set_importing_uber) = signal(false);
    let (message, set_message) = signal(None::<String>);
    let (progress, set_progress) = signal(None::<LocalProgress>);
    let (deal_count, set_deal_count) = signal(None::<usize>);

    let admin_reader =
        move || HttpDealsReader::new(api_base(), DealsQuery::admin(config.deals.admin_limit));

    let load_deals = move || {
        let reader = admin_reader();
        spawn_local(async move {
            match reader.reload().await {
                Ok(list) => set_deal_count.set(Some(list.len())),
                Err(e) => {
                    log::error!("Failed to load deals: {}", e);
                    set_message.set(Some("Failed to load deals".to_string()));
                }
            }
        });
    };

    // Load once on mount
    Effect::new(move || load_deals());

    let on_import_menus = move |_| {
        if importing.get_untracked() {
            return;
        }
        if !confirm("Scrape supported menus and auto-rank the results?") {
            return;
        }
        set_importing.set(true);
        spawn_local(async move {
            match api::scrape_import(&api_base(), ScrapeImportParams::default()).await {
                Ok(result) => set_message.set(Some(result.summary_text("Import"))),
                Err(e) => {
                    log::error!("Failed to import menus: {}", e);
                    set_message.set(Some("Failed to import menus".to_string()));
                }
            }
            set_importing.set(false);
            load_deals();
        });
    };

    let on_import_uber = move |_| {
        if importing_uber.get_untracked() {
            return;
        }
        let Some(current) = location.get_untracked() else {
            set_message.set(Some(
                "Set your location first so we know which market to price.".to_string(),
            ));
            return;
        };
        let restaurants = config.restaurants.admin.join(", ");
        if !confirm(&format!(
            "Import Uber Eats pricing for {} near {}?",
            restaurants, current
        )) {
            return;
        }
        set_importing_uber.set(true);

        let orchestrator = ImportOrchestrator::new(
            HttpJobApi::new(api_base()),
            admin_reader(),
            LocalStorageStore,
            GlooSleeper,
        )
        .with_settings(config.import.clone())
        .with_cache_key(config.storage.last_import_key.clone())
        .with_sink(set_progress);

        spawn_local(async move {
            let report = orchestrator
                .run_with(&current, &config.restaurants.admin, CachePolicy::Force)
                .await;
            let text = match &report.outcome {
                Ok(RunOutcome::Finished(outcome)) => outcome
                    .result
                    .clone()
                    .unwrap_or_default()
                    .summary_text("Uber Eats import"),
                Ok(RunOutcome::CachedReuse) => "Deals are already up to date.".to_string(),
                Err(e) => e.user_message(),
            };
            if let Ok(list) = &report.deals {
                set_deal_count.set(Some(list.len()));
            }
            set_message.set(Some(text));
            set_importing_uber.set(false);
        });
    };

    let menus_disabled = Signal::derive(move || importing.get());
    let uber_disabled = Signal::derive(move || importing_uber.get());

    view! {
        <div class="admin-page">
            <ImportProgressOverlay progress=progress />

            <h1 class="section-title">"Admin Panel"</h1>
            <h2 class="admin-page__usecase">{ImportMenus::display_name()}</h2>
            <p class="admin-page__subtitle">
                {move || match deal_count.get() {
                    Some(count) => format!("{} deals loaded", count),
                    None => "Loading deals...".to_string(),
                }}
            </p>

            <div class="card">
                <div class="card__body admin-page__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_import_menus
                        disabled=menus_disabled
                    >
                        {move || if importing.get() { "Importing..." } else { "Import supported menus" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_import_uber
                        disabled=uber_disabled
                    >
                        {move || if importing_uber.get() { "Importing..." } else { "Import Uber Eats pricing" }}
                    </Button>
                </div>
            </div>

            {move || message.get().map(|msg| view! { <pre class="admin-page__message">{msg}</pre> })}
        </div>
    }
}
