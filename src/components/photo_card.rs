//! Gallery grid tile with hover actions.

use leptos::prelude::*;

use crate::net::types::Photo;

/// A single photo in the gallery grid.
#[component]
pub fn PhotoCard(
    photo: Photo,
    on_view: Callback<Photo>,
    on_download: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let url = photo.url.clone();
    let id = photo.id.clone();
    let open = {
        let photo = photo.clone();
        move || on_view.run(photo.clone())
    };
    let open_from_button = open.clone();

    view! {
        <div class="photo-card">
            <img class="photo-card__image" src=photo.url.clone() alt="Uploaded" on:click=move |_| open()/>
            <div class="photo-card__overlay">
                <button
                    class="btn photo-card__view"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        open_from_button();
                    }
                >
                    "View"
                </button>
                <button
                    class="btn btn--primary"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_download.run(url.clone());
                    }
                >
                    "Download"
                </button>
                <button
                    class="btn btn--danger"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_delete.run(id.clone());
                    }
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
