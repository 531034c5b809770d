use chambers_core::content::AboutBlock;
use leptos::prelude::*;

use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/blocks/about.module.css");

/// About-page hero: the firm's clause beside a photo.
#[component]
pub fn AboutHero(block: AboutBlock) -> impl IntoView {
    let paragraphs = block.paragraphs();
    let photo = block.photo;

    view! {
        <section class=css::section>
            <div class=css::inner>
                <nav class=css::breadcrumb aria-label="Breadcrumb">
                    <a href=AppRoute::Home.to_hash()>"Home"</a>
                    <span>"/"</span>
                    <span class=css::current>"About Us"</span>
                </nav>
                <div class=css::grid>
                    <div>
                        <span class=css::badge>"Who We Are"</span>
                        <h1 class=css::heading>"About Our Firm"</h1>
                        {paragraphs
                            .into_iter()
                            .map(|p| view! { <p class=css::paragraph>{p}</p> })
                            .collect_view()}
                    </div>
                    {photo.map(|photo| {
                        let alt = photo.alt.unwrap_or_else(|| "Our offices".to_string());
                        view! {
                            <div class=css::photo>
                                <img src=photo.url alt=alt />
                            </div>
                        }
                    })}
                </div>
            </div>
        </section>
    }
}
