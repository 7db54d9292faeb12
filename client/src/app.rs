//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::RouteGuard;
use crate::net::api::AuthClient;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the `AuthClient` session context (unless an embedder already
/// provided one) and sets up client-side routing. `/dashboard` is mounted
/// behind `RouteGuard`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let client = use_context::<AuthClient>().unwrap_or_else(AuthClient::browser);
    provide_context(client);

    view! {
        <Stylesheet id="leptos" href="/pkg/portal.css"/>
        <Title text="Admin"/>

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <RouteGuard><DashboardPage/></RouteGuard> }
                />
            </Routes>
        </Router>
    }
}
