//! ランディングページ

use leptos::prelude::*;

#[component]
pub fn Landing<F>(on_enter: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <section class="landing">
            <h2>"Sales & go-to-market in one place"</h2>
            <p>
                "Load the team spreadsheet or upload an export to see pipeline health, "
                "strategic alerts and objection trends."
            </p>
            <button class="btn btn-primary" on:click=move |_| on_enter()>
                "Go to dashboard"
            </button>
        </section>
    }
}
