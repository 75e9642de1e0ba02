//! ヒーロー指標カード

use gtm_dashboard_common::HeroMetrics;
use leptos::prelude::*;

#[component]
pub fn HeroMetricsCard(
    #[prop(into)] metrics: Signal<HeroMetrics>,
    #[prop(default = "$")] currency: &'static str,
) -> impl IntoView {
    view! {
        <section class="card hero-metrics">
            {move || {
                metrics
                    .get()
                    .tiles(currency)
                    .into_iter()
                    .map(|tile| {
                        view! {
                            <div class="metric-tile">
                                <span class="metric-label">{tile.label}</span>
                                <span class="metric-value">{tile.value}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </section>
    }
}
