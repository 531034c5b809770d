//! Contact section: the firm's details beside a tabbed panel.
//!
//! The panel switches between an inquiry form, which hands the message to
//! the visitor's mail client, and the newsletter form.

use chambers_core::content::{ContactBlock, defaults};
use chambers_core::inquiry::{ContactTab, Inquiry};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::newsletter::NewsletterForm;
use crate::components::social::SocialLinks;
use crate::utils::{dom, mailto_link};

stylance::import_crate_style!(css, "src/components/blocks/contact.module.css");

#[component]
pub fn ContactSection(block: ContactBlock) -> impl IntoView {
    let heading = block
        .heading
        .unwrap_or_else(|| defaults::CONTACT_HEADING.to_string());
    let description = block
        .description
        .unwrap_or_else(|| defaults::CONTACT_DESCRIPTION.to_string());
    let email = block
        .email
        .unwrap_or_else(|| defaults::CONTACT_EMAIL.to_string());

    let tab = RwSignal::new(ContactTab::default());
    let tab_button = move |target: ContactTab| {
        let class = move || {
            if tab.get() == target {
                format!("{} {}", css::tab, css::tabActive)
            } else {
                css::tab.to_string()
            }
        };
        view! {
            <button
                class=class
                role="tab"
                aria-selected=move || (tab.get() == target).to_string()
                on:click=move |_| tab.set(target)
            >
                {target.label()}
            </button>
        }
    };

    let form_email = email.clone();

    view! {
        <section class=css::section>
            <div class=css::inner>
                <div class=css::panel>
                    <div class=css::tabs role="tablist">
                        {tab_button(ContactTab::Form)}
                        {tab_button(ContactTab::Newsletter)}
                    </div>
                    {move || match tab.get() {
                        ContactTab::Form => view! { <InquiryForm to=form_email.clone() /> }.into_any(),
                        ContactTab::Newsletter => view! {
                            <div class=css::newsletter>
                                <h3 class=css::panelHeading>"Subscribe to our newsletter"</h3>
                                <p class=css::panelText>
                                    "Legal insights and firm news, delivered to your inbox."
                                </p>
                                <NewsletterForm dark=true />
                            </div>
                        }
                        .into_any(),
                    }}
                </div>

                <div class=css::info>
                    <h2 class=css::heading>{heading}</h2>
                    <p class=css::description>{description}</p>

                    <div class=css::detail>
                        <span class=css::detailIcon><Icon icon=ic::MAIL /></span>
                        <div>
                            <p class=css::detailLabel>"Email"</p>
                            <a class=css::detailLink href=format!("mailto:{}", email)>{email.clone()}</a>
                        </div>
                    </div>

                    {(!block.tel.is_empty()).then(|| view! {
                        <div class=css::detail>
                            <span class=css::detailIcon><Icon icon=ic::PHONE /></span>
                            <div>
                                <p class=css::detailLabel>"Phone"</p>
                                {block
                                    .tel
                                    .into_iter()
                                    .filter_map(|t| t.phone)
                                    .map(|phone| view! {
                                        <a class=css::detailLink href=format!("tel:{}", phone)>{phone.clone()}</a>
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    })}

                    {(!block.offices.is_empty()).then(|| view! {
                        <div class=css::detail>
                            <span class=css::detailIcon><Icon icon=ic::LOCATION /></span>
                            <div>
                                <p class=css::detailLabel>"Offices"</p>
                                {block
                                    .offices
                                    .into_iter()
                                    .filter_map(|o| o.physical_address)
                                    .map(|address| view! { <p class=css::address>{address}</p> })
                                    .collect_view()}
                            </div>
                        </div>
                    })}

                    <SocialLinks
                        links=block.sociallinks
                        container_class=css::socials
                        link_class=css::socialLink
                    />
                </div>
            </div>
        </section>
    }
}

/// Inquiry form; a valid submission opens a prefilled email to `to`.
#[component]
fn InquiryForm(to: String) -> impl IntoView {
    let inquiry = RwSignal::new(Inquiry::default());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = inquiry.get_untracked();
        match current.validate() {
            Ok(()) => {
                error.set(None);
                tracing::info!("opening mail client for inquiry");
                dom::open_url(&mailto_link(&to, &current.subject(), &current.body()));
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <form class=css::form on:submit=on_submit novalidate=true>
            <h3 class=css::panelHeading>"Send us a message"</h3>
            <input
                class=css::field
                type="text"
                placeholder="Full name"
                aria-label="Full name"
                prop:value=move || inquiry.with(|i| i.name.clone())
                on:input=move |ev| inquiry.update(|i| i.name = event_target_value(&ev))
            />
            <input
                class=css::field
                type="email"
                placeholder="Email address"
                aria-label="Email address"
                prop:value=move || inquiry.with(|i| i.email.clone())
                on:input=move |ev| inquiry.update(|i| i.email = event_target_value(&ev))
            />
            <input
                class=css::field
                type="tel"
                placeholder="Phone (optional)"
                aria-label="Phone"
                prop:value=move || inquiry.with(|i| i.phone.clone())
                on:input=move |ev| inquiry.update(|i| i.phone = event_target_value(&ev))
            />
            <textarea
                class=css::field
                rows="5"
                placeholder="How can we help?"
                aria-label="Message"
                prop:value=move || inquiry.with(|i| i.message.clone())
                on:input=move |ev| inquiry.update(|i| i.message = event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! { <p class=css::error role="alert">{msg}</p> })}
            <button class=css::submit type="submit">
                <Icon icon=ic::SEND />
                "Send Message"
            </button>
        </form>
    }
}
