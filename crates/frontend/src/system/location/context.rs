use leptos::prelude::*;

use crate::shared::config::app_config;
use crate::shared::storage::{KeyValueStore, LocalStorageStore};

/// Trim user input; blank means "no location"
pub fn normalize_location(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Write the location to storage, or remove it when cleared
pub fn persist_location(store: &impl KeyValueStore, key: &str, location: Option<&str>) {
    match location {
        Some(location) => store.set(key, location),
        None => store.remove(key),
    }
}

/// The user's location, shared by every page and kept in localStorage
#[derive(Clone, Copy)]
pub struct LocationContext {
    pub location: ReadSignal<Option<String>>,
    set_location: WriteSignal<Option<String>>,
}

impl LocationContext {
    pub fn set_location(&self, location: Option<String>) {
        persist_location(
            &LocalStorageStore,
            &app_config().storage.location_key,
            location.as_deref(),
        );
        self.set_location.set(location);
    }

    pub fn clear_location(&self) {
        self.set_location(None);
    }
}

/// Location context provider component
#[component]
pub fn LocationProvider(children: Children) -> impl IntoView {
    let stored = LocalStorageStore
        .get(&app_config().storage.location_key)
        .and_then(|l| normalize_location(&l));
    let (location, set_location) = signal(stored);

    provide_context(LocationContext {
        location,
        set_location,
    });

    children()
}

/// Hook to access the location context
pub fn use_location() -> LocationContext {
    use_context::<LocationContext>().expect("LocationProvider not found in component tree")
}
