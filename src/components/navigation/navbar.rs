//! Top navigation bar.
//!
//! Fixed to the top of the viewport. Turns solid once the page is scrolled
//! past [`NAVBAR_SCROLL_THRESHOLD`], and collapses into a drawer below the
//! desktop breakpoint.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::{use_media_query, use_window_scroll};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{DESKTOP_MEDIA_QUERY, LOGO_URL, NAVBAR_SCROLL_THRESHOLD};
use crate::models::{AppRoute, primary_nav};

stylance::import_crate_style!(css, "src/components/navigation/navbar.module.css");

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let menu_open = RwSignal::new(false);
    let (_, scroll_y) = use_window_scroll();
    let is_desktop = use_media_query(DESKTOP_MEDIA_QUERY);

    // Drawer closes on navigation and when the viewport grows to desktop.
    Effect::new(move |_| {
        ctx.route.track();
        menu_open.set(false);
    });
    Effect::new(move |_| {
        if is_desktop.get() {
            menu_open.set(false);
        }
    });

    let bar_class = move || {
        if scroll_y.get() > NAVBAR_SCROLL_THRESHOLD {
            format!("{} {}", css::navbar, css::scrolled)
        } else {
            css::navbar.to_string()
        }
    };

    let links = move |class: &'static str, active_class: &'static str| {
        let current = ctx.route.get();
        primary_nav()
            .into_iter()
            .map(|item| {
                let class = if item.is_active(&current) {
                    format!("{} {}", class, active_class)
                } else {
                    class.to_string()
                };
                view! { <a class=class href=item.route.to_hash()>{item.label}</a> }
            })
            .collect_view()
    };

    view! {
        <nav class=bar_class>
            <div class=css::inner>
                <a class=css::brand href=AppRoute::Home.to_hash() aria-label="Go home">
                    <img class=css::logo src=LOGO_URL alt="" width="40" height="40" />
                    <span class=css::brandText>
                        <span class=css::brandName>"Andego Gachagua"</span>
                        <span class=css::brandSuffix>"Advocates LLP"</span>
                    </span>
                </a>

                <div class=css::links>
                    {move || links(css::link, css::linkActive)}
                </div>

                <a class=css::cta href=AppRoute::Contact.to_hash()>"Get in Touch"</a>

                <button
                    class=css::menuButton
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <Icon icon=ic::MENU />
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class=css::backdrop on:click=move |_| menu_open.set(false) />
                <div class=css::drawer>
                    <div class=css::drawerHeader>
                        <span class=css::brandName>"Menu"</span>
                        <button
                            class=css::menuButton
                            aria-label="Close menu"
                            on:click=move |_| menu_open.set(false)
                        >
                            <Icon icon=ic::CLOSE />
                        </button>
                    </div>
                    <div class=css::drawerLinks>
                        {move || links(css::drawerLink, css::linkActive)}
                    </div>
                    <a class=css::drawerCta href=AppRoute::Contact.to_hash()>"Get in Touch"</a>
                </div>
            </Show>
        </nav>
    }
}
