//! Login page exchanging credentials for a session token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[cfg(any(test, feature = "hydrate"))]
use crate::error::ApiError;
use crate::net::api::AuthClient;
use crate::net::types::Credentials;

const SIGNING_IN_MESSAGE: &str = "Entrando...";

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(error: &ApiError) -> String {
    format!("Falha no login: {error}")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let client = expect_context::<AuthClient>();
    let navigate = use_navigate();
    let identifier = RwSignal::new(String::new());
    let secret = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = Credentials::new(identifier.get(), secret.get());
        busy.set(true);
        info.set(SIGNING_IN_MESSAGE.to_owned());

        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match client.login(&credentials).await {
                    Ok(_) => {
                        navigate(crate::config::DASHBOARD_ROUTE, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(login_failed_message(&e));
                        busy.set(false);
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&client, &navigate, credentials);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Login"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Usuário"
                        autocomplete="username"
                        prop:value=move || identifier.get()
                        on:input=move |ev| identifier.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Senha"
                        autocomplete="current-password"
                        prop:value=move || secret.get()
                        on:input=move |ev| secret.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Entrar"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
