//! Dropzone and file picker component
//!
//! Both input paths (picked through the hidden input, dropped onto the
//! zone) funnel into the single `on_select` callback with at most one file.

use leptos::prelude::*;
use web_sys::{DragEvent, File};

#[component]
pub fn UploadZone<F>(
    file_name: ReadSignal<Option<String>>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(Option<File>) + 'static + Clone,
{
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let (is_dragover, set_is_dragover) = signal(false);

    let on_change = {
        let on_select = on_select.clone();
        move |_: web_sys::Event| {
            let Some(input) = input_ref.get() else {
                return;
            };
            let picked = input.files().and_then(|files| files.get(0));
            // reset so picking the same file again still fires a change
            input.set_value("");
            on_select(picked);
        }
    };

    let on_drop = {
        let on_select = on_select.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            let dropped = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0));
            on_select(dropped);
        }
    };

    let on_dragover = move |ev: DragEvent| {
        // default would make the browser navigate to the dropped file
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    view! {
        <label
            class="dropzone"
            class:dragover=move || is_dragover.get()
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
        >
            <input node_ref=input_ref type="file" accept="image/*" on:change=on_change />
            <span>
                {move || {
                    file_name
                        .get()
                        .unwrap_or_else(|| "Drop image here or click to browse".to_string())
                }}
            </span>
        </label>
    }
}
