//! Application router component.
//!
//! Handles URL-based routing with hash history so the site works from any
//! static host. Uses native hashchange events instead of leptos_router.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the route signal in
//!   [`AppContext`] mirrors `#/path`
//! - **Chrome never re-renders on navigation**: navbar and footer stay mounted
//! - **Pages re-mount per route**: each page owns its fetches and timers,
//!   which are dropped when the visitor navigates away

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::navigation::{Footer, Navbar};
use crate::components::pages::{CmsPage, NotFound, TeamMemberPage};
use crate::models::AppRoute;
use crate::utils::dom;

/// Main application router.
///
/// - `#/`, `#/about`, `#/practice-areas`, `#/our-team` → CMS page
/// - `#/contact` → CMS page, always ending in a contact section
/// - `#/our-team/<slug>` → attorney profile
/// - anything else → not found
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let route = ctx.route;

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
            dom::scroll_to_top();
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    Effect::new(move || {
        let current = route.get();
        tracing::debug!(hash = %current.to_hash(), "route changed");
        dom::set_title(&current.title());
    });

    let route_memo = Memo::new(move |_| route.get());

    view! {
        <Navbar />
        <main>
            {move || render_route(route_memo.get())}
        </main>
        <Footer />
    }
}

fn render_route(route: AppRoute) -> AnyView {
    match route {
        AppRoute::TeamMember { slug } => view! { <TeamMemberPage slug=slug /> }.into_any(),
        AppRoute::NotFound { path } => view! { <NotFound path=path /> }.into_any(),
        page => {
            let ensure_contact = page == AppRoute::Contact;
            match page.page_slug() {
                Some(slug) => view! { <CmsPage slug=slug ensure_contact=ensure_contact /> }.into_any(),
                None => view! { <NotFound path=page.to_hash() /> }.into_any(),
            }
        }
    }
}
