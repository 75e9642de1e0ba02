//! ダッシュボード操作バー
//!
//! 状態は呼び出し側のシグナルに持たせ、このコンポーネントは表示と切替だけ行う

use gtm_dashboard_common::controls::view_mode_toggle_visible;
use gtm_dashboard_common::{DashboardView, ViewMode};
use leptos::prelude::*;

fn toggle_label(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::Table => "▦ Cards",
        ViewMode::Cards => "☰ Table",
    }
}

#[component]
pub fn DashboardControlsBar(
    view: ReadSignal<DashboardView>,
    set_view: WriteSignal<DashboardView>,
    mode: ReadSignal<ViewMode>,
    set_mode: WriteSignal<ViewMode>,
    developer_mode: ReadSignal<bool>,
    set_developer_mode: WriteSignal<bool>,
) -> impl IntoView {
    let menu = DashboardView::ALL
        .iter()
        .map(|&item| {
            view! {
                <button
                    class=move || if view.get() == item { "menu-item active" } else { "menu-item" }
                    on:click=move |_| set_view.set(item)
                >
                    {item.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class="dashboard-controls">
            <div class="view-menu">{menu}</div>

            <div class="control-toggles">
                <Show when=move || view_mode_toggle_visible(view.get())>
                    <button
                        class="btn btn-secondary"
                        title="Switch between table and cards"
                        on:click=move |_| set_mode.update(|m| *m = m.toggled())
                    >
                        {move || toggle_label(mode.get())}
                    </button>
                </Show>

                <button
                    class=move || if developer_mode.get() { "btn btn-dev active" } else { "btn btn-dev" }
                    aria-pressed=move || developer_mode.get().to_string()
                    on:click=move |_| set_developer_mode.update(|on| *on = !*on)
                >
                    "Developer"
                </button>
            </div>
        </nav>
    }
}
