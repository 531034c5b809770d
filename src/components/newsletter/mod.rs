//! Newsletter subscription form.
//!
//! Used in the footer and on the contact page. Form state lives in
//! [`chambers_core::newsletter::NewsletterForm`]; this component only sends
//! the request and schedules success notices to fade.

use chambers_core::error::SubscribeError;
use chambers_core::newsletter::{self, Notice, NewsletterForm as FormState};
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::components::hooks::use_timer;
use crate::components::icons as ic;
use crate::config::{NOTICE_DISMISS_MS, SUBSCRIBE_URL};
use crate::utils::post_json;

stylance::import_crate_style!(css, "src/components/newsletter/newsletter.module.css");

#[component]
pub fn NewsletterForm(
    /// Render on a dark background (footer).
    #[prop(optional)]
    dark: bool,
) -> impl IntoView {
    let form = RwSignal::new(FormState::new());
    let dismiss_timer = use_timer();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(request) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };
        // a fresh submission owns the notice area
        dismiss_timer.try_update_value(|slot| slot.cancel());

        spawn_local(async move {
            let result = match post_json(SUBSCRIBE_URL, &request).await {
                Ok((status, body)) => newsletter::outcome_from_response(status, &body),
                Err(e) => Err(SubscribeError::from(e)),
            };
            match &result {
                Ok(outcome) => tracing::info!(?outcome, "newsletter subscription completed"),
                Err(e) => tracing::warn!(error = %e, "newsletter subscription failed"),
            }

            let Some(notice) = form.try_update(|f| {
                f.complete(result);
                f.notice().cloned()
            }) else {
                return;
            };

            if notice.as_ref().is_some_and(Notice::auto_dismiss) {
                dismiss_timer.try_update_value(|slot| {
                    slot.schedule_once(NOTICE_DISMISS_MS, move || {
                        form.try_update(|f| f.dismiss());
                    });
                });
            }
        });
    };

    let notice_view = move || {
        form.with(|f| {
            f.notice().map(|notice| {
                let class = match notice {
                    Notice::Failed(_) => format!("{} {}", css::notice, css::noticeError),
                    _ => format!("{} {}", css::notice, css::noticeSuccess),
                };
                view! { <p class=class role="status">{notice.message().to_string()}</p> }
            })
        })
    };

    let form_class = if dark {
        format!("{} {}", css::form, css::dark)
    } else {
        css::form.to_string()
    };

    view! {
        <form class=form_class on:submit=on_submit novalidate=true>
            <div class=css::row>
                <input
                    class=css::input
                    type="email"
                    placeholder="Your email address"
                    aria-label="Email address"
                    prop:value=move || form.with(|f| f.email().to_string())
                    on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                />
                <button
                    class=css::submit
                    type="submit"
                    disabled=move || form.with(|f| f.is_pending())
                >
                    <span class=css::submitIcon><Icon icon=ic::SEND /></span>
                    {move || if form.with(|f| f.is_pending()) { "Subscribing..." } else { "Subscribe" }}
                </button>
            </div>
            {notice_view}
        </form>
    }
}
