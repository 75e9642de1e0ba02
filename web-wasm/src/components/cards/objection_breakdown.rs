//! オブジェクション内訳（横棒グラフ）

use gtm_dashboard_common::{objection_bars, ObjectionPalette, ObjectionTypeEntry};
use leptos::prelude::*;

/// 最小でも見える幅（%）
const MIN_BAR_PERCENT: f64 = 2.0;

fn bar_style(color: &str, ratio: f64) -> String {
    let width = (ratio * 100.0).clamp(MIN_BAR_PERCENT, 100.0);
    format!("width: {:.1}%; background-color: {};", width, color)
}

#[component]
pub fn ObjectionBreakdown(
    #[prop(into)] entries: Signal<Vec<ObjectionTypeEntry>>,
    #[prop(optional)] palette: ObjectionPalette,
) -> impl IntoView {
    view! {
        <section class="card objection-breakdown">
            <h3>"Objection Breakdown"</h3>
            {move || {
                let bars = entries.with(|entries| objection_bars(entries, &palette));
                if bars.is_empty() {
                    return view! { <p class="text-muted">"No objections recorded"</p> }.into_any();
                }
                bars.into_iter()
                    .map(|bar| {
                        view! {
                            <div class="objection-row">
                                <span class="objection-label">{bar.label}</span>
                                <div class="objection-track">
                                    <div class="objection-bar" style=bar_style(&bar.color, bar.ratio) />
                                </div>
                                <span class="objection-value">{bar.value}</span>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_style() {
        assert_eq!(bar_style("#ef4444", 0.5), "width: 50.0%; background-color: #ef4444;");
        assert_eq!(bar_style("#94a3b8", 0.0), "width: 2.0%; background-color: #94a3b8;");
    }
}
