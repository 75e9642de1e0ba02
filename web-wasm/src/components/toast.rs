//! トースト通知

use crate::app::Toast;
use gtm_dashboard_common::NoticeLevel;
use leptos::prelude::*;

fn level_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "toast toast-info",
        NoticeLevel::Error => "toast toast-error",
    }
}

/// 画面右下に積み上げる。一定時間で消えるほか、クリックでも閉じる
#[component]
pub fn ToastStack<F>(toasts: ReadSignal<Vec<Toast>>, on_dismiss: F) -> impl IntoView
where
    F: Fn(u64) + Clone + Send + Sync + 'static,
{
    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let on_dismiss = on_dismiss.clone();
                    let id = toast.id;
                    view! {
                        <div class=level_class(toast.notice.level) on:click=move |_| on_dismiss(id)>
                            <strong class="toast-title">{toast.notice.title}</strong>
                            <p class="toast-description">{toast.notice.description}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_class() {
        assert_eq!(level_class(NoticeLevel::Error), "toast toast-error");
        assert_eq!(level_class(NoticeLevel::Info), "toast toast-info");
    }
}
