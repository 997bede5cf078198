// Fallback page for unknown routes
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <article class="prose">
            <h1>"Page Not Found"</h1>
            <p>"There is no documentation page at this address."</p>
            <p><a href="/">"Back to the introduction"</a></p>
        </article>
    }
}
