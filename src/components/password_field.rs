//! Password input with a show/hide toggle.

use leptos::prelude::*;

use crate::state::auth::AuthFormState;

#[component]
pub fn PasswordField(value: RwSignal<String>, form: RwSignal<AuthFormState>) -> impl IntoView {
    view! {
        <label class="auth-field">
            <span class="auth-field__label">"Password"</span>
            <div class="auth-field__password">
                <input
                    class="auth-field__input"
                    name="password"
                    required=true
                    type=move || form.with(AuthFormState::password_input_type)
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="auth-field__toggle"
                    title=move || if form.with(|f| f.show_password) { "Hide password" } else { "Show password" }
                    on:click=move |_| form.update(AuthFormState::toggle_password)
                >
                    {move || if form.with(|f| f.show_password) { "🙈" } else { "👁" }}
                </button>
            </div>
        </label>
    }
}
