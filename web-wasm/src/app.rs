//! メインアプリケーションコンポーネント

use crate::components::{
    dashboard_page::DashboardPage, header::Header, landing::Landing, toast::ToastStack,
};
use gloo::timers::callback::Timeout;
use gtm_dashboard_common::{DataOrigin, Dataset, Notice};
use leptos::prelude::*;
use std::sync::Arc;

/// トーストの表示時間
pub const TOAST_DURATION_MS: u32 = 5_000;

/// 表示中のページ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    /// load_on_enter が true なら表示時にシートを取得する
    Dashboard { load_on_enter: bool },
}

impl Page {
    /// ランディングの「Go to dashboard」から遷移する先
    pub fn enter_dashboard() -> Self {
        Page::Dashboard { load_on_enter: true }
    }
}

/// 通知1件
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// メインアプリケーションコンポーネント
///
/// 読み込んだデータセットはここで保持し、子コンポーネントへ渡す
#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Landing);
    let (dataset, set_dataset) = signal(None::<Arc<Dataset>>);
    let (origin, set_origin) = signal(DataOrigin::Sample);
    let (toasts, set_toasts) = signal(Vec::<Toast>::new());
    let (next_toast_id, set_next_toast_id) = signal(0u64);

    let dismiss = move |id: u64| {
        set_toasts.update(|list| list.retain(|t| t.id != id));
    };

    let notify = move |notice: Notice| {
        let id = next_toast_id.get_untracked();
        set_next_toast_id.set(id + 1);
        set_toasts.update(|list| list.push(Toast { id, notice }));
        Timeout::new(TOAST_DURATION_MS, move || dismiss(id)).forget();
    };

    let on_data_loaded = move |data: Dataset, from: DataOrigin| {
        log::info!("dataset replaced: {} ({} rows)", from.describe(), data.len());
        notify(Notice::loaded(data.len(), &from.describe()));
        set_dataset.set(Some(Arc::new(data)));
        set_origin.set(from);
    };

    view! {
        <div class="container">
            <Header on_home=move || set_page.set(Page::Landing) />

            {move || match page.get() {
                Page::Landing => view! {
                    <Landing on_enter=move || set_page.set(Page::enter_dashboard()) />
                }
                .into_any(),
                Page::Dashboard { load_on_enter } => view! {
                    <DashboardPage
                        load_on_enter=load_on_enter
                        dataset=dataset
                        origin=origin
                        on_data_loaded=on_data_loaded
                        notify=notify
                    />
                }
                .into_any(),
            }}

            <ToastStack toasts=toasts on_dismiss=dismiss />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_dashboard_loads_on_entry() {
        assert_eq!(Page::enter_dashboard(), Page::Dashboard { load_on_enter: true });
        assert_ne!(Page::enter_dashboard(), Page::Landing);
    }
}
