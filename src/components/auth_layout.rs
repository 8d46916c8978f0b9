//! Two-column shell shared by the login and signup screens.

use leptos::prelude::*;

/// Hero panel on the left, form card on the right.
#[component]
pub fn AuthLayout(
    hero_title: &'static str,
    hero_text: &'static str,
    card_title: &'static str,
    #[prop(into)] error: Signal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="auth-page">
            <aside class="auth-page__hero">
                <div class="auth-page__hero-text">
                    <h1>{hero_title}</h1>
                    <p>{hero_text}</p>
                </div>
            </aside>
            <main class="auth-page__main">
                <div class="auth-card">
                    <h2 class="auth-card__title">{card_title}</h2>
                    <Show when=move || error.with(Option::is_some)>
                        <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    {children()}
                </div>
            </main>
        </div>
    }
}
