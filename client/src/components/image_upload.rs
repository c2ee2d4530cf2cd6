//! File picker for image fields.
//!
//! The selected file is held by the parent form and uploaded on submit, so
//! an abandoned form never leaves an orphaned object in storage.

use leptos::prelude::*;

/// Browser file handle on hydrate builds; uninhabited placeholder elsewhere
/// so form signals keep one type across both compilations.
#[cfg(feature = "hydrate")]
pub type SelectedFile = web_sys::File;
#[cfg(not(feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile;

/// Name of the selected file, for display next to the picker.
fn selected_name(file: Option<&SelectedFile>) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        file.map(web_sys::File::name)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        file.map(|_| String::new())
    }
}

#[component]
pub fn ImageUpload(
    label: &'static str,
    file: RwSignal<Option<SelectedFile>, LocalStorage>,
    #[prop(optional)] current_url: String,
) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast as _;
            if let Some(target) = ev.target() {
                let input: web_sys::HtmlInputElement = target.unchecked_into();
                file.set(input.files().and_then(|list| list.get(0)));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &ev;
        }
    };

    let has_current = !current_url.is_empty();

    view! {
        <div class="field field--upload">
            <label class="field__label">{label}</label>
            <input type="file" accept="image/*" on:change=on_change/>
            <Show when=move || file.get().is_some()>
                <span class="field__file-name">
                    {move || selected_name(file.get().as_ref()).unwrap_or_default()}
                </span>
            </Show>
            <Show when=move || has_current>
                <img class="field__preview" src=current_url.clone() alt="current image"/>
            </Show>
        </div>
    }
}
