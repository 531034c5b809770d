use leptos::prelude::*;

use super::css;
use crate::models::AppRoute;

#[component]
pub fn NotFound(path: String) -> impl IntoView {
    tracing::info!(%path, "no route");
    view! {
        <div class=css::status>
            <h1 class=css::statusTitle>"404"</h1>
            <p class=css::statusText>
                "The page "
                <code>{format!("/{}", path)}</code>
                " could not be found."
            </p>
            <a class=css::statusLink href=AppRoute::Home.to_hash()>"Return Home"</a>
        </div>
    }
}
