//! 重要アラートのバナー

use gtm_dashboard_common::AlertBanner;
use leptos::prelude::*;

#[component]
pub fn StrategicAlertBanner(
    #[prop(into)] red_flags: Signal<Vec<String>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let banner = Memo::new(move |_| red_flags.with(|flags| AlertBanner::new(loading.get(), flags)));

    view! {
        <section class="card strategic-alerts">
            <h3>"Strategic Alerts"</h3>
            {move || match banner.get() {
                AlertBanner::Alerts(list) => view! {
                    <ul class="alert-list">
                        {list
                            .into_iter()
                            .map(|alert| view! { <li class="alert-entry">"⚠ " {alert}</li> })
                            .collect_view()}
                    </ul>
                }
                .into_any(),
                other => view! {
                    <p class="text-muted">{other.message().unwrap_or_default()}</p>
                }
                .into_any(),
            }}
        </section>
    }
}
