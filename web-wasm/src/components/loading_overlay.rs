//! 読込中オーバーレイ

use leptos::prelude::*;

/// 画面全体を覆い、読込完了まで操作を止める
#[component]
pub fn LoadingOverlay(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="loading-overlay" role="status" aria-live="polite">
            <div class="spinner" />
            <p class="loading-text">{message}</p>
        </div>
    }
}
