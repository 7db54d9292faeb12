//! Dashboard page showing the protected message.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route, always mounted behind
//! `RouteGuard`. It issues one protected fetch per mount; the task is
//! aborted on unmount so a late response cannot touch a disposed view.

use leptos::prelude::*;

use crate::net::api::AuthClient;
use crate::state::dashboard::{DashboardPhase, DashboardState, LOADING_MESSAGE};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let client = expect_context::<AuthClient>();
    let state = RwSignal::new(DashboardState::default());

    #[cfg(feature = "hydrate")]
    {
        let client = client.clone();
        crate::util::task::spawn_until_cleanup(async move {
            let next = crate::state::dashboard::load_dashboard(&client).await;
            state.set(next);
        });
    }

    let on_logout = move |_| {
        client.logout();
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(crate::config::LOGIN_ROUTE);
            }
        }
    };

    view! {
        <div class="dashboard-page">
            <h1>"Dashboard"</h1>
            {move || {
                let current = state.get();
                match current.phase() {
                    DashboardPhase::Error(error) => {
                        view! { <p class="dashboard-page__error">{error.to_owned()}</p> }.into_any()
                    }
                    DashboardPhase::Loaded(data) => {
                        view! { <p class="dashboard-page__data">{data.to_owned()}</p> }.into_any()
                    }
                    DashboardPhase::Loading => view! { <p>{LOADING_MESSAGE}</p> }.into_any(),
                }
            }}
            <button class="btn" on:click=on_logout>
                "Sair"
            </button>
        </div>
    }
}
