//! Result panel component
//!
//! Pure projection of the submission state: exactly one of placeholder,
//! error text, or the populated result view.

use leptos::prelude::*;

use mlpdr_common::{Recognition, SubmissionState, SubmissionView};

#[component]
pub fn ResultPanel(submission: ReadSignal<SubmissionView>) -> impl IntoView {
    view! {
        <section class="card result-card">
            <h2>"Result"</h2>
            {move || {
                submission.with(|submission| {
                    if let Some(message) = submission.error_message() {
                        return view! { <p class="error">{message.to_string()}</p> }.into_any();
                    }
                    match submission.state() {
                        SubmissionState::Succeeded(recognition) => {
                            recognition_view(recognition).into_any()
                        }
                        _ => view! { <p class="placeholder">"No result yet."</p> }.into_any(),
                    }
                })
            }}
        </section>
    }
}

fn recognition_view(recognition: &Recognition) -> impl IntoView {
    let gallery = recognition
        .gallery()
        .into_iter()
        .map(|(caption, url)| (caption, url.to_string()))
        .collect::<Vec<_>>();

    view! {
        <div class="result-head">
            <div>
                <p class="label">"OCR mode"</p>
                <p>{recognition.ocr_mode.label()}</p>
            </div>
            <div>
                <p class="label">"Plate detected"</p>
                <p>{recognition.plate_detected_display()}</p>
            </div>
        </div>
        <div class="plate-output">
            <p class="label">"Recognized plate"</p>
            <p class="plate-text">{recognition.plate_text_display().to_string()}</p>
        </div>
        <div class="artifacts-grid">
            {gallery
                .into_iter()
                .map(|(caption, url)| {
                    view! {
                        <figure>
                            <figcaption>{caption}</figcaption>
                            <img src=url alt=caption />
                        </figure>
                    }
                })
                .collect_view()}
        </div>
    }
}
