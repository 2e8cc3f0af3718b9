use leptos::prelude::*;

use crate::shared::import_job::display::{percent, stage_label, PLACEHOLDER_PERCENT};
use crate::shared::import_job::{LocalProgress, ProgressSink};

/// Lets a signal receive engine progress directly
impl ProgressSink for WriteSignal<Option<LocalProgress>> {
    fn show(&self, progress: &LocalProgress) {
        self.set(Some(progress.clone()));
    }

    fn hide(&self) {
        self.set(None);
    }
}

/// Modal progress bar shown while an import job runs
#[component]
pub fn ImportProgressOverlay(progress: ReadSignal<Option<LocalProgress>>) -> impl IntoView {
    let pct = move || {
        progress
            .get()
            .map(|p| percent(&p))
            .unwrap_or(PLACEHOLDER_PERCENT)
    };
    let stage = move || progress.get().map(|p| stage_label(&p)).unwrap_or("");

    view! {
        <Show when=move || progress.get().is_some_and(|p| p.visible)>
            <div class="import-overlay">
                <div class="import-overlay__card">
                    <div class="import-overlay__header">
                        <span>"Loading"</span>
                        <span>{move || format!("{}%", pct())}</span>
                    </div>
                    <div class="import-overlay__track">
                        <div
                            class="import-overlay__bar"
                            style=move || format!("width: {}%", pct())
                        ></div>
                    </div>
                    <p class="import-overlay__stage">{stage}</p>
                </div>
            </div>
        </Show>
    }
}
