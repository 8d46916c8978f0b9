//! "Upload a New Photo" form.

use leptos::prelude::*;

/// Label for the file picker when nothing is selected.
pub const PICK_PROMPT: &str = "Click to select a photo";

/// Upload button text for the given in-flight state.
#[must_use]
pub fn upload_button_label(uploading: bool) -> &'static str {
    if uploading { "Uploading..." } else { "Upload" }
}

/// File picker plus submit button.
///
/// `selected_name` is the picked file's name, if any. `on_pick` receives the
/// picker's `change` event; `on_submit` fires on form submission.
#[component]
pub fn UploadCard(
    #[prop(into)] selected_name: Signal<Option<String>>,
    #[prop(into)] uploading: Signal<bool>,
    on_pick: Callback<leptos::ev::Event>,
    on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="upload-card">
            <h2 class="upload-card__title">"Upload a New Photo"</h2>
            <form
                class="upload-card__form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.run(());
                }
            >
                <div class="upload-card__drop">
                    <input
                        id="photo-upload"
                        type="file"
                        accept="image/*"
                        class="visually-hidden"
                        on:change=move |ev| on_pick.run(ev)
                    />
                    <label for="photo-upload" class="upload-card__label">
                        {move || selected_name.get().unwrap_or_else(|| PICK_PROMPT.to_owned())}
                    </label>
                </div>
                <button class="btn btn--primary btn--block" type="submit" disabled=move || uploading.get()>
                    {move || upload_button_label(uploading.get())}
                </button>
                <Show when=move || uploading.get()>
                    <p class="upload-card__wait">"Please wait..."</p>
                </Show>
            </form>
        </section>
    }
}
