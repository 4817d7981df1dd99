//! OCR mode picker component

use leptos::prelude::*;

use mlpdr_common::OcrMode;

#[component]
pub fn ModePicker(
    mode: ReadSignal<OcrMode>,
    set_mode: WriteSignal<OcrMode>,
) -> impl IntoView {
    view! {
        <div class="mode-grid">
            {OcrMode::ALL
                .into_iter()
                .map(|candidate| {
                    view! {
                        <label class="mode" class:active=move || mode.get() == candidate>
                            <input
                                type="radio"
                                name="ocr_mode"
                                value=candidate.key()
                                prop:checked=move || mode.get() == candidate
                                on:change=move |_| set_mode.set(candidate)
                            />
                            <span>{candidate.label()}</span>
                        </label>
                    }
                })
                .collect_view()}
        </div>
    }
}
