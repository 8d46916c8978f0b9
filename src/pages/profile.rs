//! Profile page: header, upload form, photo grid, and the viewer modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated route. The profile is fetched once on mount; every
//! later change to the grid comes from a server-confirmed mutation applied
//! to the page-local [`GalleryState`].

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::photo_card::PhotoCard;
use crate::components::photo_modal::PhotoModal;
use crate::components::profile_header::ProfileHeader;
use crate::components::upload_card::UploadCard;
use crate::net::api::HttpPhotoApi;
use crate::net::types::Photo;
use crate::net::upload::SelectedFile;
use crate::routes;
use crate::services::gallery::{self as gallery_service, GalleryError};
use crate::state::gallery::GalleryState;
use crate::state::session::{BrowserSession, SessionStore};
use crate::util::dialog;
use crate::util::task::spawn_ui;

/// Grid placeholder when the user has no photos.
pub const EMPTY_GALLERY: &str = "No photos uploaded yet.";

/// Where to go after `err`, if the page has to be left.
#[must_use]
pub fn redirect_for(err: &GalleryError) -> Option<&'static str> {
    err.requires_login().then_some(routes::LOGIN)
}

fn report(err: &GalleryError, next_route: RwSignal<Option<&'static str>>) {
    if let Some(notice) = err.notice() {
        dialog::notify(&notice);
    }
    if let Some(to) = redirect_for(err) {
        next_route.set(Some(to));
    }
}

/// Profile page. Redirects to `/` when no session token is stored.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let api = expect_context::<HttpPhotoApi>();
    let session = expect_context::<BrowserSession>();
    let navigate = use_navigate();

    let gallery = RwSignal::new(GalleryState::default());
    let selected = RwSignal::new_local(None::<SelectedFile>);
    let next_route = RwSignal::new(None::<&'static str>);

    Effect::new(move || {
        if let Some(to) = next_route.get() {
            navigate(to, NavigateOptions::default());
        }
    });

    if session.is_signed_in() {
        let api = api.clone();
        spawn_ui(async move {
            match gallery_service::load_profile(&api, &session).await {
                Ok(profile) => gallery.update(|g| g.apply_profile(profile)),
                Err(err) => report(&err, next_route),
            }
        });
    } else {
        next_route.set(Some(routes::LOGIN));
    }

    let on_pick = Callback::new(move |ev: leptos::ev::Event| {
        selected.set(SelectedFile::from_input_event(&ev));
    });

    let upload_api = api.clone();
    let on_upload = Callback::new(move |()| {
        if gallery.with_untracked(|g| g.uploading) {
            return;
        }
        let file = selected.get_untracked();
        if file.is_some() {
            gallery.update(|g| g.uploading = true);
        }
        let api = upload_api.clone();
        spawn_ui(async move {
            let result = gallery_service::upload_photo(&api, &session, file.as_ref()).await;
            gallery.update(|g| g.uploading = false);
            match result {
                Ok(photo) => {
                    gallery.update(|g| g.prepend_photo(photo));
                    selected.set(None);
                    dialog::notify(gallery_service::UPLOAD_SUCCEEDED);
                }
                Err(err) => report(&err, next_route),
            }
        });
    });

    let avatar_api = api.clone();
    let on_avatar_change = Callback::new(move |ev: leptos::ev::Event| {
        let file = SelectedFile::from_input_event(&ev);
        let api = avatar_api.clone();
        spawn_ui(async move {
            match gallery_service::change_avatar(&api, &session, file.as_ref()).await {
                Ok(Some(url)) => {
                    gallery.update(|g| g.set_avatar(url));
                    dialog::notify(gallery_service::AVATAR_SUCCEEDED);
                }
                Ok(None) => {}
                Err(err) => report(&err, next_route),
            }
        });
    });

    let delete_api = api;
    let on_delete = Callback::new(move |photo_id: String| {
        if !dialog::confirm(gallery_service::DELETE_PROMPT) {
            return;
        }
        let api = delete_api.clone();
        spawn_ui(async move {
            match gallery_service::delete_photo(&api, &session, &photo_id).await {
                Ok(()) => {
                    gallery.update(|g| {
                        g.remove_photo(&photo_id);
                    });
                    dialog::notify(gallery_service::DELETE_SUCCEEDED);
                }
                Err(err) => report(&err, next_route),
            }
        });
    });

    let on_download = Callback::new(move |url: String| {
        spawn_ui(async move {
            if let Err(err) = gallery_service::download_photo(&url).await {
                report(&err, next_route);
            }
        });
    });

    let on_view = Callback::new(move |photo: Photo| gallery.update(|g| g.open_viewer(photo)));
    let on_close = Callback::new(move |()| gallery.update(GalleryState::close_viewer));
    let on_logout = Callback::new(move |()| next_route.set(Some(gallery_service::logout(&session))));

    let viewing = Memo::new(move |_| gallery.with(|g| g.viewing.clone()));
    let photos = move || gallery.with(|g| g.photos.clone());
    let has_photos = move || gallery.with(|g| !g.photos.is_empty());

    view! {
        <div class="profile-page">
            <ProfileHeader gallery=gallery on_avatar_change=on_avatar_change on_logout=on_logout/>
            <main class="profile-page__body">
                <UploadCard
                    selected_name=Signal::derive(move || {
                        selected.with(|f| f.as_ref().map(|f| f.name().to_owned()))
                    })
                    uploading=Signal::derive(move || gallery.with(|g| g.uploading))
                    on_pick=on_pick
                    on_submit=on_upload
                />
                <section class="gallery">
                    <h2 class="gallery__title">"Your Gallery"</h2>
                    <Show
                        when=has_photos
                        fallback=|| view! { <p class="gallery__empty">{EMPTY_GALLERY}</p> }
                    >
                        <div class="gallery__grid">
                            <For each=photos key=|photo: &Photo| photo.id.clone() let:photo>
                                <PhotoCard
                                    photo=photo
                                    on_view=on_view
                                    on_download=on_download
                                    on_delete=on_delete
                                />
                            </For>
                        </div>
                    </Show>
                </section>
            </main>
            {move || {
                viewing
                    .get()
                    .map(|photo| {
                        view! {
                            <PhotoModal
                                photo=Signal::derive(move || photo.clone())
                                on_close=on_close
                                on_download=on_download
                                on_delete=on_delete
                            />
                        }
                    })
            }}
        </div>
    }
}
