use chambers_core::content::{HeroCard, HeroCardsBlock};
use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/blocks/cards.module.css");

/// Four value cards overlapping the bottom of the hero.
#[component]
pub fn HeroCards(block: HeroCardsBlock) -> impl IntoView {
    let cards = if block.cards.is_empty() {
        HeroCard::defaults()
    } else {
        block.cards
    };

    view! {
        <section class=css::section>
            <div class=css::grid>
                {cards
                    .into_iter()
                    .enumerate()
                    .map(|(index, card)| view! {
                        <article class=css::card>
                            <span class=css::number>{format!("{:02}", index + 1)}</span>
                            <h3 class=css::title>{card.title}</h3>
                            <p class=css::body>{card.content}</p>
                        </article>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
