//! Services carousel on the home page.
//!
//! Pages through the block's practice areas [`SERVICES_PAGE_SIZE`] at a
//! time. Cards fade while the transition lock is held.

use chambers_core::content::{Service, ServicesBlock, defaults};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::carousel::CarouselControls;
use crate::components::hooks::use_directory_view;
use crate::components::icons as ic;
use crate::config::carousel::SERVICES_PAGE_SIZE;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/blocks/services.module.css");

#[component]
pub fn Services(block: ServicesBlock) -> impl IntoView {
    let heading = block
        .heading
        .unwrap_or_else(|| defaults::SERVICES_HEADING.to_string());
    let is_empty = block.practice_areas.is_empty();
    let view_state = use_directory_view(block.practice_areas, SERVICES_PAGE_SIZE);

    let items = view_state.current_items();
    let locked = view_state.is_transitioning();
    let track_class = move || {
        if locked.get() {
            format!("{} {}", css::track, css::transitioning)
        } else {
            css::track.to_string()
        }
    };

    view! {
        <section class=css::section>
            <div class=css::inner>
                <div class=css::header>
                    <span class=css::badge>"Legal Expertise"</span>
                    <h2 class=css::heading>{heading}</h2>
                </div>

                {if is_empty {
                    view! { <p class=css::empty>"No services listed yet."</p> }.into_any()
                } else {
                    view! {
                        <div class=track_class>
                            {move || {
                                items
                                    .get()
                                    .into_iter()
                                    .map(|service| view! { <ServiceCard service=service /> })
                                    .collect_view()
                            }}
                        </div>
                        <CarouselControls
                            page_count=view_state.page_count()
                            current_page=view_state.current_page()
                            locked=locked
                            on_command=Callback::new(move |command| view_state.dispatch(command))
                            inverted=true
                        />
                    }
                    .into_any()
                }}
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: Service) -> impl IntoView {
    let number = service.id.as_u64().map(|id| format!("{:02}", id));

    view! {
        <article class=css::card>
            <div class=css::cardAccent />
            {number.map(|n| view! { <span class=css::number>{n}</span> })}
            <h3 class=css::title>{service.title.unwrap_or_default()}</h3>
            {service.description.map(|d| view! { <p class=css::description>{d}</p> })}
            <a class=css::more href=AppRoute::PracticeAreas.to_hash()>
                "Learn more"
                <Icon icon=ic::ARROW_RIGHT />
            </a>
        </article>
    }
}
