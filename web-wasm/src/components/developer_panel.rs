//! 開発者パネル

use gtm_dashboard_common::{DataOrigin, Dataset};
use leptos::prelude::*;
use std::sync::Arc;

/// 先頭レコードをJSONで出す（確認用）
fn first_record_json(dataset: &Dataset) -> Option<String> {
    dataset
        .records()
        .first()
        .and_then(|record| serde_json::to_string_pretty(record).ok())
}

#[component]
pub fn DeveloperPanel(
    dataset: ReadSignal<Option<Arc<Dataset>>>,
    origin: ReadSignal<DataOrigin>,
    #[prop(into)] skipped_rows: Signal<usize>,
) -> impl IntoView {
    view! {
        <section class="card developer-panel">
            <h3>"Developer"</h3>
            <dl>
                <dt>"Source"</dt>
                <dd>{move || origin.get().describe()}</dd>
                <dt>"Rows"</dt>
                <dd>{move || dataset.get().map(|d| d.len()).unwrap_or(0)}</dd>
                <dt>"Columns"</dt>
                <dd>{move || dataset.get().map(|d| d.columns().join(", ")).unwrap_or_default()}</dd>
                <dt>"Skipped rows"</dt>
                <dd>{move || skipped_rows.get()}</dd>
            </dl>
            {move || {
                dataset
                    .get()
                    .and_then(|d| first_record_json(&d))
                    .map(|json| view! { <pre class="record-json">{json}</pre> })
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtm_dashboard_common::{CellValue, Record};

    #[test]
    fn test_first_record_json() {
        let dataset = Dataset::new(
            vec!["Account".into()],
            vec![Record::new().with("Account", CellValue::Text("Acme".into()))],
        );
        let json = first_record_json(&dataset).unwrap();
        assert!(json.contains("\"Account\": \"Acme\""));
        assert_eq!(first_record_json(&Dataset::default()), None);
    }
}
