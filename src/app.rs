//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{appointments::AppointmentsPage, edit_schedule::EditSchedulePage};
use crate::state::admin::AdminState;
use crate::util::token;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="vi">
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
/// Provides the shared admin state context and sets up client-side routing.
/// The credential token is read from `localStorage` once at startup; its
/// presence gates whether data fetches are attempted at all.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let admin = RwSignal::new(AdminState {
        token: token::read_token(),
        ..AdminState::default()
    });
    provide_context(admin);

    view! {
        <Stylesheet id="leptos" href="/pkg/clinic-admin.css"/>
        <Title text="Quản trị phòng khám"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AppointmentsPage/>
                <Route path=StaticSegment("all-appointments") view=AppointmentsPage/>
                <Route
                    path=(StaticSegment("edit-work-schedule"), ParamSegment("id"))
                    view=EditSchedulePage
                />
            </Routes>
        </Router>
    }
}
