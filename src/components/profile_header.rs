//! Sticky profile header: avatar, username, avatar picker, logout.

use leptos::prelude::*;

use crate::state::gallery::GalleryState;

/// Header bar for the profile page.
///
/// `on_avatar_change` receives the raw `change` event of the hidden file
/// input so the page can pull the picked file out of it.
#[component]
pub fn ProfileHeader(
    gallery: RwSignal<GalleryState>,
    on_avatar_change: Callback<leptos::ev::Event>,
    on_logout: Callback<()>,
) -> impl IntoView {
    let avatar = move || gallery.with(|g| g.avatar_url().map(str::to_owned));
    let name = move || gallery.with(|g| g.display_name().to_owned());

    view! {
        <header class="profile-header">
            <div class="profile-header__identity">
                {move || match avatar() {
                    Some(src) => view! { <img class="profile-header__avatar" src=src alt="Avatar"/> }.into_any(),
                    None => view! { <div class="profile-header__avatar profile-header__avatar--empty">"?"</div> }.into_any(),
                }}
                <div>
                    <h1 class="profile-header__name">{name}</h1>
                    <label class="profile-header__avatar-picker">
                        "Change Avatar"
                        <input
                            type="file"
                            accept="image/*"
                            class="visually-hidden"
                            on:change=move |ev| on_avatar_change.run(ev)
                        />
                    </label>
                </div>
            </div>
            <button class="btn btn--danger" on:click=move |_| on_logout.run(())>
                "Logout"
            </button>
        </header>
    }
}
