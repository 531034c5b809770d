//! Site footer: brand, quick links, firm contacts and the newsletter form.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::newsletter::NewsletterForm;
use crate::config::{LOGO_URL, SITE_DESCRIPTION, SITE_NAME, SITE_TAGLINE, firm};
use crate::models::{AppRoute, primary_nav};

stylance::import_crate_style!(css, "src/components/navigation/footer.module.css");

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class=css::footer>
            <div class=css::grid>
                <div class=css::brandColumn>
                    <a class=css::brand href=AppRoute::Home.to_hash() aria-label="Go home">
                        <img src=LOGO_URL alt="" width="45" height="45" />
                        <span class=css::brandText>
                            <span>"Andego Gachagua"</span>
                            <span class=css::accent>"Advocates LLP"</span>
                        </span>
                    </a>
                    <p class=css::description>{SITE_DESCRIPTION}</p>
                </div>

                <div>
                    <h3 class=css::heading>"Quick Links"</h3>
                    <ul class=css::list>
                        {primary_nav()
                            .into_iter()
                            .map(|item| view! {
                                <li><a class=css::link href=item.route.to_hash()>{item.label}</a></li>
                            })
                            .collect_view()}
                    </ul>
                </div>

                <div>
                    <h3 class=css::heading>"Contact Us"</h3>
                    <ul class=css::list>
                        <li class=css::contactRow>
                            <span class=css::icon><Icon icon=ic::PHONE /></span>
                            <span class=css::stack>
                                {firm::PHONES
                                    .iter()
                                    .map(|(display, target)| view! {
                                        <a class=css::link href=format!("tel:{}", target)>{*display}</a>
                                    })
                                    .collect_view()}
                            </span>
                        </li>
                        <li class=css::contactRow>
                            <span class=css::icon><Icon icon=ic::MAIL /></span>
                            <a class=css::link href=format!("mailto:{}", firm::EMAIL)>{firm::EMAIL}</a>
                        </li>
                        <li class=css::contactRow>
                            <span class=css::icon><Icon icon=ic::LOCATION /></span>
                            <span class=css::stack>
                                {firm::ADDRESSES
                                    .iter()
                                    .map(|address| view! { <span>{*address}</span> })
                                    .collect_view()}
                            </span>
                        </li>
                    </ul>
                </div>

                <div>
                    <h3 class=css::heading>"Stay Informed"</h3>
                    <p class=css::description>
                        "Subscribe to our newsletter for legal updates and firm news."
                    </p>
                    <NewsletterForm />
                </div>
            </div>

            <div class=css::bottom>
                <span>{format!("© {} {}. All rights reserved.", year, SITE_NAME)}</span>
                <span class=css::accent>{SITE_TAGLINE}</span>
            </div>
        </footer>
    }
}
