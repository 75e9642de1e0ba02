//! マーケット状況カード

use gtm_dashboard_common::market_slots;
use leptos::prelude::*;

#[component]
pub fn MarketContextCard(#[prop(into)] items: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <section class="card market-context">
            <h3>"Market Context"</h3>
            <div class="market-slots">
                {move || {
                    items.with(|items| market_slots(items))
                        .into_iter()
                        .map(|slot| {
                            view! {
                                <div class="market-slot" class:placeholder=!slot.provided>
                                    <h4>{slot.category.title()}</h4>
                                    <p>{slot.description}</p>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
