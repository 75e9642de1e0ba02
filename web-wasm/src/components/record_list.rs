//! レコード一覧（テーブル / カード）

use gtm_dashboard_common::{Dataset, ViewMode};
use leptos::prelude::*;
use std::sync::Arc;

/// 値のある列だけ (列名, 値) で返す
fn filled_cells(dataset: &Dataset, index: usize) -> Vec<(String, String)> {
    dataset
        .columns()
        .iter()
        .cloned()
        .zip(dataset.row_cells(index))
        .filter(|(_, value)| !value.is_empty())
        .collect()
}

fn table_view(dataset: &Dataset) -> AnyView {
    let header = dataset
        .columns()
        .iter()
        .map(|name| view! { <th>{name.clone()}</th> })
        .collect_view();
    let rows = (0..dataset.len())
        .map(|i| {
            let cells = dataset
                .row_cells(i)
                .into_iter()
                .map(|cell| view! { <td>{cell}</td> })
                .collect_view();
            view! { <tr>{cells}</tr> }
        })
        .collect_view();

    view! {
        <div class="table-wrapper">
            <table class="record-table">
                <thead><tr>{header}</tr></thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
    .into_any()
}

fn cards_view(dataset: &Dataset) -> AnyView {
    let cards = (0..dataset.len())
        .map(|i| {
            let fields = filled_cells(dataset, i)
                .into_iter()
                .map(|(name, value)| {
                    view! {
                        <div class="record-field">
                            <span class="field-name">{name}</span>
                            <span class="field-value">{value}</span>
                        </div>
                    }
                })
                .collect_view();
            view! { <div class="record-card">{fields}</div> }
        })
        .collect_view();

    view! { <div class="record-cards">{cards}</div> }.into_any()
}

#[component]
pub fn RecordList(
    dataset: ReadSignal<Option<Arc<Dataset>>>,
    mode: ReadSignal<ViewMode>,
) -> impl IntoView {
    view! {
        <section class="card record-list">
            {move || match dataset.get() {
                None => view! {
                    <p class="text-muted">"Showing sample metrics. Fetch the sheet or upload a file to see deals."</p>
                }
                .into_any(),
                Some(dataset) => match mode.get() {
                    ViewMode::Table => table_view(&dataset),
                    ViewMode::Cards => cards_view(&dataset),
                },
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtm_dashboard_common::{CellValue, Record};

    #[test]
    fn test_filled_cells_skips_blank() {
        let dataset = Dataset::new(
            vec!["Account".into(), "Risk".into()],
            vec![Record::new()
                .with("Account", CellValue::Text("Acme".into()))
                .with("Risk", CellValue::Empty)],
        );
        assert_eq!(filled_cells(&dataset, 0), vec![("Account".to_string(), "Acme".to_string())]);
    }
}
