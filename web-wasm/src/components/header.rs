//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header<F>(on_home: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <header class="header">
            <h1 class="brand" on:click=move |_| on_home()>"GTM Dashboard"</h1>
            <p class="text-muted">"Pipeline, market signals and objections at a glance"</p>
        </header>
    }
}
