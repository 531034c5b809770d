use chambers_core::content::CtaBlock;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/blocks/cta.module.css");

/// Call-to-action banner linking to the contact page.
#[component]
pub fn CallToAction(block: CtaBlock) -> impl IntoView {
    let style = block
        .background_image
        .map(|image| format!("background-image: url('{}')", image.url));

    view! {
        <section class=css::section style=style>
            <div class=css::overlay />
            <div class=css::content>
                <h2 class=css::title>{block.title}</h2>
                <p class=css::description>{block.description}</p>
                <a class=css::button href=AppRoute::Contact.to_hash()>
                    "Contact Us Today"
                    <Icon icon=ic::ARROW_RIGHT />
                </a>
            </div>
        </section>
    }
}
