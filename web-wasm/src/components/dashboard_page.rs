//! ダッシュボードページ

use crate::components::cards::{
    hero_metrics::HeroMetricsCard, market_context::MarketContextCard,
    objection_breakdown::ObjectionBreakdown, strategic_alerts::StrategicAlertBanner,
};
use crate::components::{
    dashboard_controls::DashboardControlsBar, data_loader::DataLoaderPanel,
    developer_panel::DeveloperPanel, record_list::RecordList,
};
use gtm_dashboard_common::{DashboardData, DashboardView, DataOrigin, Dataset, Notice, ViewMode};
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn DashboardPage<F, N>(
    load_on_enter: bool,
    dataset: ReadSignal<Option<Arc<Dataset>>>,
    origin: ReadSignal<DataOrigin>,
    on_data_loaded: F,
    notify: N,
) -> impl IntoView
where
    F: Fn(Dataset, DataOrigin) + Clone + Send + Sync + 'static,
    N: Fn(Notice) + Clone + Send + Sync + 'static,
{
    let (view, set_view) = signal(DashboardView::default());
    let (mode, set_mode) = signal(ViewMode::default());
    let (developer_mode, set_developer_mode) = signal(false);
    let (is_loading, set_is_loading) = signal(false);

    // 未読込ならサンプル値で埋める
    let data = Memo::new(move |_| {
        dataset.with(|d| {
            d.as_deref()
                .map(DashboardData::from_dataset)
                .unwrap_or_else(DashboardData::sample)
        })
    });

    view! {
        <main class="dashboard">
            <DataLoaderPanel
                is_loading=is_loading
                set_is_loading=set_is_loading
                on_data_loaded=on_data_loaded
                notify=notify
                auto_fetch=load_on_enter
            />

            <DashboardControlsBar
                view=view
                set_view=set_view
                mode=mode
                set_mode=set_mode
                developer_mode=developer_mode
                set_developer_mode=set_developer_mode
            />

            {move || match view.get() {
                DashboardView::Ae => view! {
                    <HeroMetricsCard metrics=Signal::derive(move || data.get().hero) />
                    <StrategicAlertBanner
                        red_flags=Signal::derive(move || data.get().red_flags)
                        loading=is_loading
                    />
                    <RecordList dataset=dataset mode=mode />
                }
                .into_any(),
                DashboardView::ClInsight => view! {
                    <MarketContextCard items=Signal::derive(move || data.get().market_context) />
                    <ObjectionBreakdown entries=Signal::derive(move || data.get().objections) />
                }
                .into_any(),
            }}

            <Show when=move || developer_mode.get()>
                <DeveloperPanel
                    dataset=dataset
                    origin=origin
                    skipped_rows=Signal::derive(move || data.get().skipped_rows)
                />
            </Show>
        </main>
    }
}
