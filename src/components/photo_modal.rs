//! Full-size photo modal with the zoomable viewer and per-photo actions.

use leptos::prelude::*;

use crate::components::zoomable_image::ZoomableImage;
use crate::net::types::Photo;

/// Overlay showing `photo` until the backdrop or close button is clicked.
#[component]
pub fn PhotoModal(
    #[prop(into)] photo: Signal<Photo>,
    on_close: Callback<()>,
    on_download: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let url = Signal::derive(move || photo.with(|p| p.url.clone()));

    view! {
        <div class="photo-modal" on:click=move |_| on_close.run(())>
            <div class="photo-modal__card" on:click=move |ev| ev.stop_propagation()>
                <ZoomableImage url=url/>
                <div class="photo-modal__actions">
                    <div class="photo-modal__buttons">
                        <button
                            class="btn btn--primary"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_download.run(photo.with_untracked(|p| p.url.clone()));
                            }
                        >
                            "Download"
                        </button>
                        <button
                            class="btn btn--danger"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_delete.run(photo.with_untracked(|p| p.id.clone()));
                            }
                        >
                            "Delete"
                        </button>
                    </div>
                    <button
                        class="photo-modal__close"
                        title="Close"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_close.run(());
                        }
                    >
                        "✕"
                    </button>
                </div>
            </div>
        </div>
    }
}
