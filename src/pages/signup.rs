//! Signup page: register, then log in automatically with the same
//! credentials.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::auth_layout::AuthLayout;
use crate::components::password_field::PasswordField;
use crate::net::api::HttpPhotoApi;
use crate::routes;
use crate::services::auth::{self, AuthOutcome};
use crate::state::auth::AuthFormState;
use crate::state::session::BrowserSession;
use crate::util::dialog;
use crate::util::task::spawn_ui;

/// Submit button text for the given loading state.
#[must_use]
pub fn submit_label(loading: bool) -> &'static str {
    if loading { "Creating..." } else { "Sign Up" }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let api = expect_context::<HttpPhotoApi>();
    let session = expect_context::<BrowserSession>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form = RwSignal::new(AuthFormState::default());
    let next_route = RwSignal::new(None::<&'static str>);

    Effect::new(move || {
        if let Some(to) = next_route.get() {
            navigate(to, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut started = false;
        form.update(|f| started = f.begin_submit());
        if !started {
            return;
        }
        let signup_form = auth::signup_from_input(
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        );

        let api = api.clone();
        spawn_ui(async move {
            match auth::signup(&api, &session, &signup_form).await {
                AuthOutcome::SignedIn { to, notice } => {
                    form.update(|f| f.finish(None));
                    dialog::notify(notice);
                    next_route.set(Some(to));
                }
                AuthOutcome::NoToken => form.update(|f| f.finish(None)),
                AuthOutcome::Failed(message) => form.update(|f| f.finish(Some(message))),
            }
        });
    };

    view! {
        <AuthLayout
            hero_title="Join Us"
            hero_text="Create your account and start your journey with us today."
            card_title="Create Account"
            error=Signal::derive(move || form.with(|f| f.error.clone()))
        >
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-field">
                    <span class="auth-field__label">"Username"</span>
                    <input
                        class="auth-field__input"
                        type="text"
                        name="username"
                        required=true
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-field">
                    <span class="auth-field__label">"Email"</span>
                    <input
                        class="auth-field__input"
                        type="email"
                        name="email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <PasswordField value=password form=form/>
                <button
                    class="btn btn--primary btn--block"
                    type="submit"
                    disabled=move || form.with(|f| f.loading)
                >
                    {move || submit_label(form.with(|f| f.loading))}
                </button>
            </form>
            <p class="auth-card__switch">
                "Already have an account? "
                <A href=routes::LOGIN>"Log in"</A>
            </p>
        </AuthLayout>
    }
}
