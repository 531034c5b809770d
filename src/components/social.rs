//! Row of outbound social profile links.

use chambers_core::content::SocialLinks as Links;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::utils::validate_external_link;

/// Icon links for every present, whitelisted network.
///
/// Links that fail validation are dropped (and logged) rather than
/// rendered.
#[component]
pub fn SocialLinks(
    links: Option<Links>,
    container_class: &'static str,
    link_class: &'static str,
) -> impl IntoView {
    let entries: Vec<_> = links
        .map(|l| l.present())
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(network, url)| {
            validate_external_link(&url)
                .into_option()
                .map(|url| (network, url))
        })
        .collect();

    (!entries.is_empty()).then(|| {
        view! {
            <div class=container_class>
                {entries
                    .into_iter()
                    .map(|(network, url)| view! {
                        <a
                            class=link_class
                            href=url
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label=network.label()
                        >
                            <Icon icon=ic::social(network) />
                        </a>
                    })
                    .collect_view()}
            </div>
        }
    })
}
