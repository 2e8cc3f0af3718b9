use contracts::domain::a001_deal::{Deal, DealSort, DealsQuery};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api::{HttpDealsReader, HttpJobApi};
use crate::shared::components::{DealCard, ImportProgressOverlay};
use crate::shared::api_utils::api_base;
use crate::shared::config::app_config;
use crate::shared::import_job::{DealsReader, GlooSleeper, ImportOrchestrator, LocalProgress};
use crate::shared::storage::LocalStorageStore;
use crate::system::location::context::normalize_location;
use crate::system::location::use_location;

/// Whether the location still needs a run. A location picked while
/// another run is in flight is picked up once that run ends.
fn needs_import(current: Option<&str>, started_for: Option<&str>, busy: bool) -> bool {
    !busy && current.is_some() && current != started_for
}

#[component]
pub fn HomePage() -> impl IntoView {
    let config = app_config();
    let location_ctx = use_location();
    let location = location_ctx.location;

    let (deals, set_deals) = signal(Vec::<Deal>::new());
    let (loading, set_loading) = signal(false);
    let (error_msg, set_error_msg) = signal(None::<String>);
    let (is_scraping, set_is_scraping) = signal(false);
    let (progress, set_progress) = signal(None::<LocalProgress>);
    let (selected_restaurant, set_selected_restaurant) = signal(String::new());
    let (sort_by, set_sort_by) = signal(DealSort::default());
    let (started_for, set_started_for) = signal(None::<String>);
    let (location_input, set_location_input) =
        signal(location.get_untracked().unwrap_or_default());

    let deals_query = move || {
        DealsQuery::home(
            Some(selected_restaurant.get_untracked()),
            sort_by.get_untracked(),
            config.deals.home_limit,
        )
    };

    let load_deals = move || {
        set_loading.set(true);
        let reader = HttpDealsReader::new(api_base(), deals_query());
        spawn_local(async move {
            match reader.reload().await {
                Ok(list) => {
                    set_deals.set(list);
                    set_error_msg.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load deals: {}", e);
                    set_error_msg.set(Some(
                        "Failed to load deals. Make sure the backend is running.".to_string(),
                    ));
                }
            }
            set_loading.set(false);
        });
    };

    let start_import = move || {
        let Some(current) = location.get_untracked() else {
            return;
        };
        // One run at a time
        if is_scraping.get_untracked() {
            return;
        }
        set_is_scraping.set(true);
        set_loading.set(true);
        set_started_for.set(Some(current.clone()));

        let orchestrator = ImportOrchestrator::new(
            HttpJobApi::new(api_base()),
            HttpDealsReader::new(api_base(), deals_query()),
            LocalStorageStore,
            GlooSleeper,
        )
        .with_settings(config.import.clone())
        .with_cache_key(config.storage.last_import_key.clone())
        .with_sink(set_progress);

        spawn_local(async move {
            let report = orchestrator.run(&current, &config.restaurants.home).await;
            set_error_msg.set(report.user_message());
            if let Ok(list) = report.deals {
                set_deals.set(list);
            }
            set_is_scraping.set(false);
            set_loading.set(false);
        });
    };

    // Import, or reuse the last import, whenever the location changes
    Effect::new(move || {
        let current = location.get();
        let busy = is_scraping.get();
        if needs_import(current.as_deref(), started_for.get_untracked().as_deref(), busy) {
            start_import();
        }
    });

    // Filters only need a reload; skip the first run, the import above covers it
    Effect::new(move |prev: Option<()>| {
        sort_by.track();
        selected_restaurant.track();
        if prev.is_some() && location.get_untracked().is_some() && !is_scraping.get_untracked() {
            load_deals();
        }
    });

    let on_set_location = move |_| {
        location_ctx.set_location(normalize_location(&location_input.get_untracked()));
    };
    let on_clear_location = move |_| {
        set_location_input.set(String::new());
        location_ctx.clear_location();
    };
    let on_refresh = move |_| start_import();
    let refresh_disabled = Signal::derive(move || is_scraping.get() || location.get().is_none());

    view! {
        <div class="home-page">
            <ImportProgressOverlay progress=progress />

            <div class="home-page__header">
                <h1 class="gradient-text">"BiteRank"</h1>
                <h2 class="section-title">
                    "Discover the best value deals near you from your favorite restaurants!"
                </h2>
            </div>

            <div class="card">
                <div class="card__body filters">
                    <div class="form__group">
                        <label class="form__label">"Location"</label>
                        <input
                            class="form__input"
                            type="text"
                            placeholder="ZIP like 10001 or City, ST"
                            prop:value=move || location_input.get()
                            on:input=move |ev| { set_location_input.set(event_target_value(&ev)); }
                        />
                        <button class="button button--secondary" on:click=on_set_location>
                            "Set location"
                        </button>
                        <button class="button button--secondary" on:click=on_clear_location>
                            "Clear"
                        </button>
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Restaurant"</label>
                        <select
                            class="form__select"
                            prop:value=move || selected_restaurant.get()
                            on:change=move |ev| { set_selected_restaurant.set(event_target_value(&ev)); }
                        >
                            <option value="">"All Restaurants"</option>
                            {config
                                .restaurants
                                .home
                                .iter()
                                .map(|name| view! { <option value={name.clone()}>{name.clone()}</option> })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Sort by"</label>
                        <select
                            class="form__select"
                            prop:value=move || sort_by.get().as_str()
                            on:change=move |ev| {
                                if let Some(sort) = DealSort::from_str_opt(&event_target_value(&ev)) {
                                    set_sort_by.set(sort);
                                }
                            }
                        >
                            {DealSort::ALL
                                .into_iter()
                                .map(|sort| view! { <option value={sort.as_str()}>{sort.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>

                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_refresh
                        disabled=refresh_disabled
                    >
                        "Refresh"
                    </Button>
                </div>
            </div>

            {move || error_msg.get().map(|msg| view! { <div class="error-banner">{msg}</div> })}

            {move || {
                if loading.get() {
                    let text = if is_scraping.get() {
                        "Fetching fresh deals for your location..."
                    } else {
                        "Loading deals..."
                    };
                    view! { <p class="home-page__loading">{text}</p> }.into_any()
                } else if error_msg.get().is_some() {
                    ().into_any()
                } else if deals.get().is_empty() {
                    view! {
                        <div class="card empty-state">
                            <p class="empty-state__title">"No deals found"</p>
                            <p>
                                "Make sure your location is accurate (ZIP like 10001 or City, ST) and try refreshing."
                            </p>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="deal-grid">
                            {deals
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(i, deal)| view! { <DealCard deal=deal rank={i + 1} /> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
