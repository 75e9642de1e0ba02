//! データローダーコンポーネント
//!
//! シート取得ボタンとアップロードエリアをまとめ、
//! 読込中は全画面オーバーレイに切り替える。

use crate::api::sheets::SheetSource;
use crate::components::{loading_overlay::LoadingOverlay, upload_area::UploadArea};
use gtm_dashboard_common::{DataLoader, DataOrigin, Dataset, Notice};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn DataLoaderPanel<F, N>(
    is_loading: ReadSignal<bool>,
    set_is_loading: WriteSignal<bool>,
    on_data_loaded: F,
    notify: N,
    /// マウント直後に一度だけ取得する
    #[prop(optional)]
    auto_fetch: bool,
) -> impl IntoView
where
    F: Fn(Dataset, DataOrigin) + Clone + Send + Sync + 'static,
    N: Fn(Notice) + Clone + Send + Sync + 'static,
{
    let fetch = {
        let on_data_loaded = on_data_loaded.clone();
        let notify = notify.clone();
        move || {
            let on_data_loaded = on_data_loaded.clone();
            let notify = notify.clone();
            spawn_local(async move {
                let loader = DataLoader::new(SheetSource);
                let origin = DataOrigin::Sheet(loader.sheet_url().to_string());
                let set_loading = move |loading: bool| set_is_loading.set(loading);
                let outcome = loader
                    .fetch_sheet(&set_loading, &notify, move |dataset| on_data_loaded(dataset, origin))
                    .await;
                log::debug!("sheet fetch finished: {:?}", outcome);
            });
        }
    };

    if auto_fetch {
        let fetch = fetch.clone();
        Effect::new(move |_| fetch());
    }

    let on_upload = move |dataset: Dataset, file_name: String| {
        let on_data_loaded = on_data_loaded.clone();
        DataLoader::new(SheetSource)
            .accept_upload(dataset, move |dataset| on_data_loaded(dataset, DataOrigin::Upload(file_name)));
    };

    view! {
        <div class="data-loader">
            <Show
                when=move || is_loading.get()
                fallback=move || {
                    let fetch = fetch.clone();
                    view! {
                        <div class="data-loader-actions">
                            <button class="btn btn-primary" on:click=move |_| fetch()>
                                "Fetch from Google Sheets"
                            </button>
                            <UploadArea on_upload=on_upload.clone() notify=notify.clone() />
                        </div>
                    }
                }
            >
                <LoadingOverlay message="Loading data..." />
            </Show>
        </div>
    }
}
