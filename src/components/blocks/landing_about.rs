use chambers_core::content::{LandingAboutBlock, defaults};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/blocks/landing_about.module.css");

/// Short firm introduction on the home page.
#[component]
pub fn LandingAbout(block: LandingAboutBlock) -> impl IntoView {
    let heading = block
        .heading
        .unwrap_or_else(|| defaults::LANDING_HEADING.to_string());
    let description = block
        .description
        .unwrap_or_else(|| defaults::LANDING_DESCRIPTION.to_string());

    view! {
        <section class=css::section>
            <div class=css::inner>
                <div class=css::accent />
                <h2 class=css::heading>{heading}</h2>
                <p class=css::description>{description}</p>
                <a class=css::link href=AppRoute::About.to_hash()>
                    "Learn More About Us"
                    <Icon icon=ic::CHEVRON_RIGHT />
                </a>
            </div>
        </section>
    }
}
