//! アップロードエリアコンポーネント

use gloo::file::futures::read_as_text;
use gloo::file::File;
use gtm_dashboard_common::{parse_upload, Dataset, Error, Notice, Result};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{DragEvent, FileList};

/// 受け付ける拡張子（input の accept 属性）
const ACCEPT: &str = ".csv,.tsv,.json";

/// アップロード失敗の通知
pub fn upload_failed(file_name: &str, error: &Error) -> Notice {
    let description = match error {
        Error::UnsupportedFormat(ext) => {
            format!("Unsupported file type \".{}\". Use CSV, TSV or JSON.", ext)
        }
        Error::NoData => format!("{} contains no rows.", file_name),
        other => other.to_string(),
    };
    Notice::error("Upload failed", description)
}

async fn read_upload(file: &File) -> Result<Dataset> {
    let text = read_as_text(file)
        .await
        .map_err(|e| Error::Parse(e.to_string()))?;
    parse_upload(&file.name(), &text)
}

/// ファイル選択・ドロップを受け付け、パースできたものだけ on_upload に渡す
///
/// 失敗はここでトースト通知する
#[component]
pub fn UploadArea<F, N>(on_upload: F, notify: N) -> impl IntoView
where
    F: Fn(Dataset, String) + Clone + Send + Sync + 'static,
    N: Fn(Notice) + Clone + Send + Sync + 'static,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let (is_reading, set_is_reading) = signal(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let handle_files = move |files: FileList| {
        let Some(file) = files.get(0) else {
            return;
        };
        let on_upload = on_upload.clone();
        let notify = notify.clone();
        let file = File::from(file);
        set_is_reading.set(true);

        spawn_local(async move {
            let name = file.name();
            match read_upload(&file).await {
                Ok(dataset) => {
                    log::info!("upload parsed: {} ({} rows)", name, dataset.len());
                    on_upload(dataset, name);
                }
                Err(e) => {
                    log::warn!("upload rejected: {}: {}", name, e);
                    notify(upload_failed(&name, &e));
                }
            }
            set_is_reading.set(false);
        });
    };

    let on_drop = {
        let handle_files = handle_files.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);
            if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
                handle_files(files);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |_| {
        let Some(input) = input_ref.get() else {
            return;
        };
        if let Some(files) = input.files() {
            handle_files(files);
        }
        // 同じファイルを選び直しても change が発火するようにする
        input.set_value("");
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                if is_reading.get() {
                    classes.push("disabled");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <input
                type="file"
                accept=ACCEPT
                class="hidden"
                node_ref=input_ref
                on:change=on_change
                on:click=|ev| ev.stop_propagation()
            />
            <div class="upload-icon">"📄"</div>
            <p>"Drop a file here or click to choose"</p>
            <p class="text-muted">"Supported: CSV, TSV, JSON"</p>
        </div>
    }
}
