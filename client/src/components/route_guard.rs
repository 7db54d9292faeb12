//! Route guard wrapper for protected pages.
//!
//! The decision runs in an effect, so it happens in the browser on every
//! mount of the guarded route and never during SSR. Until it has run the
//! guard renders nothing, which keeps server output and hydration in step.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::LOGIN_ROUTE;
use crate::net::api::AuthClient;
use crate::util::auth::{GuardOutcome, evaluate_guard};

/// Render `children` only when a session token is present; otherwise
/// replace the current history entry with the login route.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let client = expect_context::<AuthClient>();
    let navigate = use_navigate();
    let outcome = RwSignal::new(None::<GuardOutcome>);

    Effect::new(move || {
        let decided = evaluate_guard(&client.session_status());
        if decided == GuardOutcome::Redirected {
            leptos::logging::log!("no session token, redirecting to {LOGIN_ROUTE}");
            navigate(LOGIN_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        outcome.set(Some(decided));
    });

    view! {
        <Show when=move || outcome.get() == Some(GuardOutcome::Authorized)>
            {children()}
        </Show>
    }
}
