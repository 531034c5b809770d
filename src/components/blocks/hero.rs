//! Full-bleed landing hero.

use chambers_core::content::{HeroBlock, defaults};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/blocks/hero.module.css");

#[component]
pub fn Hero(block: HeroBlock) -> impl IntoView {
    let heading = block
        .heading
        .unwrap_or_else(|| defaults::HERO_HEADING.to_string());
    let subheading = block
        .subheading
        .unwrap_or_else(|| defaults::HERO_SUBHEADING.to_string());
    let image = block
        .hero_image
        .map(|m| m.url)
        .unwrap_or_else(|| defaults::HERO_IMAGE.to_string());

    view! {
        <section
            class=css::hero
            style=format!("background-image: url('{}')", image)
        >
            <div class=css::overlay />
            <div class=css::content>
                <span class=css::badge>"Trusted Legal Counsel"</span>
                <h1 class=css::heading>{heading}</h1>
                <p class=css::subheading>{subheading}</p>
                <div class=css::actions>
                    <a class=css::primary href=AppRoute::Contact.to_hash()>
                        "Schedule a Consultation"
                        <Icon icon=ic::ARROW_RIGHT />
                    </a>
                    <a class=css::secondary href=AppRoute::PracticeAreas.to_hash()>
                        "Our Practice Areas"
                    </a>
                </div>
            </div>
        </section>
    }
}
