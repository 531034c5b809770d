use chambers_core::content::{OfficeDetailsBlock, OfficeLocation};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/blocks/office.module.css");

/// Office locations with address, phone, email and opening hours.
#[component]
pub fn OfficeDetails(block: OfficeDetailsBlock) -> impl IntoView {
    let heading = block.heading.unwrap_or_else(|| "Our Offices".to_string());

    view! {
        <section class=css::section>
            <div class=css::inner>
                <h2 class=css::heading>{heading}</h2>
                <div class=css::grid>
                    {block
                        .offices
                        .into_iter()
                        .map(|office| view! { <OfficeCard office=office /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn OfficeCard(office: OfficeLocation) -> impl IntoView {
    view! {
        <article class=css::card>
            {office.name.map(|name| view! { <h3 class=css::name>{name}</h3> })}
            <ul class=css::details>
                {office.address.map(|address| view! {
                    <li><Icon icon=ic::LOCATION /><span>{address}</span></li>
                })}
                {office.phone.map(|phone| view! {
                    <li>
                        <Icon icon=ic::PHONE />
                        <a href=format!("tel:{}", phone)>{phone.clone()}</a>
                    </li>
                })}
                {office.email.map(|email| view! {
                    <li>
                        <Icon icon=ic::MAIL />
                        <a href=format!("mailto:{}", email)>{email.clone()}</a>
                    </li>
                })}
                {office.hours.map(|hours| view! {
                    <li><Icon icon=ic::CLOCK /><span>{hours}</span></li>
                })}
            </ul>
        </article>
    }
}
