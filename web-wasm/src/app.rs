//! Root application component

use gloo::console;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, SubmitEvent};

use mlpdr_common::{OcrMode, SubmissionView};

use crate::api;
use crate::components::{
    header::Header,
    mode_picker::ModePicker,
    result_panel::ResultPanel,
    upload_zone::UploadZone,
};
use crate::preview::PreviewUrl;

#[component]
pub fn App() -> impl IntoView {
    let (mode, set_mode) = signal(OcrMode::default());
    let (submission, set_submission) = signal(SubmissionView::new());
    let (file_name, set_file_name) = signal(None::<String>);

    // File and object URL are JS handles, so these stay thread-local
    let file = RwSignal::new_local(None::<File>);
    let preview = RwSignal::new_local(None::<PreviewUrl>);

    // dropping the stored handle revokes its URL
    on_cleanup(move || preview.set(None));

    // both input paths (picker, drop) land here with at most one file
    let select_file = move |picked: Option<File>| {
        let Some(new_file) = picked else {
            return;
        };
        set_submission.update(SubmissionView::reset_for_selection);
        set_file_name.set(Some(new_file.name()));
        preview.set(PreviewUrl::for_file(&new_file).ok());
        file.set(Some(new_file));
    };

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(current) = file.get_untracked() else {
            set_submission.update(SubmissionView::reject_without_file);
            return;
        };
        // None while a submission is already in flight
        let Some(attempt) = set_submission.try_update(SubmissionView::begin).flatten() else {
            return;
        };
        let chosen_mode = mode.get_untracked();

        spawn_local(async move {
            let outcome = api::upload::submit_image(&current, chosen_mode).await;
            let applied = set_submission
                .try_update(|view| view.resolve(attempt, outcome))
                .unwrap_or(false);
            if !applied {
                console::warn!("stale upload response discarded");
            }
        });
    };

    view! {
        <div class="page">
            <Header />

            <main class="layout">
                <section class="card upload-card">
                    <h2>"Upload"</h2>
                    <form on:submit=submit>
                        <ModePicker mode=mode set_mode=set_mode />

                        <UploadZone file_name=file_name on_select=select_file />

                        <button
                            type="submit"
                            disabled=move || submission.with(SubmissionView::is_in_flight)
                        >
                            {move || {
                                if submission.with(SubmissionView::is_in_flight) {
                                    "Processing..."
                                } else {
                                    "Detect Plate"
                                }
                            }}
                        </button>
                    </form>

                    <Show when=move || preview.with(|handle| handle.is_some())>
                        <div class="preview-box">
                            <p>"Input preview"</p>
                            <img
                                src=move || {
                                    preview.with(|handle| {
                                        handle
                                            .as_ref()
                                            .map(|url| url.as_str().to_string())
                                            .unwrap_or_default()
                                    })
                                }
                                alt="Selected"
                            />
                        </div>
                    </Show>
                </section>

                <ResultPanel submission=submission />
            </main>
        </div>
    }
}
