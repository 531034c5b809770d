//! "Why choose us" section with animated statistic counters.
//!
//! Counting starts the first time the section is at least
//! [`VISIBILITY_THRESHOLD`] visible and runs once. The tick loop stops on
//! its own when the animation finishes or the section is unmounted.

use std::time::Duration;

use chambers_core::content::WhyUsBlock;
use chambers_core::counter::{CounterAnimation, target_from};
use gloo_timers::future::TimeoutFuture;
use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::{UseIntersectionObserverOptions, use_intersection_observer_with_options};
use wasm_bindgen_futures::spawn_local;

use crate::components::icons as ic;
use crate::config::counters::{DURATION_MS, TICK_MS, VISIBILITY_THRESHOLD};
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/blocks/why_us.module.css");

const STAT_ICONS: [IconData; 4] = [ic::SCALE, ic::USERS, ic::AWARD, ic::CHECK];

async fn run_counters(animation: RwSignal<CounterAnimation>) {
    loop {
        TimeoutFuture::new(TICK_MS).await;
        // None once the section is gone
        if animation.try_update(|a| a.tick()) != Some(true) {
            break;
        }
    }
}

#[component]
pub fn WhyUs(block: WhyUsBlock) -> impl IntoView {
    let labels: Vec<String> = block.stats().iter().map(|s| s.label.clone()).collect();
    let targets = block.stats().iter().map(|s| target_from(s.value)).collect();
    let animation = RwSignal::new(CounterAnimation::new(
        targets,
        Duration::from_millis(DURATION_MS),
        Duration::from_millis(u64::from(TICK_MS)),
    ));

    let section_ref = NodeRef::<leptos::html::Section>::new();
    let started = StoredValue::new(false);

    use_intersection_observer_with_options(
        section_ref,
        move |entries, _| {
            if started.get_value() || !entries.iter().any(|e| e.is_intersecting()) {
                return;
            }
            started.set_value(true);
            tracing::debug!("why-us counters started");
            spawn_local(run_counters(animation));
        },
        UseIntersectionObserverOptions::default().thresholds(vec![VISIBILITY_THRESHOLD]),
    );

    let stats = labels
        .into_iter()
        .zip(STAT_ICONS)
        .enumerate()
        .map(|(index, (label, icon))| {
            let value = move || {
                animation.with(|a| a.values().get(index).copied().unwrap_or_default())
            };
            view! {
                <div class=css::stat>
                    <span class=css::statIcon><Icon icon=icon /></span>
                    <h3 class=css::statValue>{value}"+"</h3>
                    <p class=css::statLabel>{label}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class=css::section node_ref=section_ref>
            <div class=css::inner>
                <div class=css::mission>
                    <span class=css::badge>"Why Choose Us"</span>
                    <h2 class=css::heading>{block.heading}</h2>
                    <p class=css::description>{block.description}</p>
                    <a class=css::button href=AppRoute::Contact.to_hash()>
                        "Schedule a Consultation"
                        <Icon icon=ic::CHEVRON_RIGHT />
                    </a>
                </div>
                <div class=css::stats>{stats}</div>
            </div>
        </section>
    }
}
