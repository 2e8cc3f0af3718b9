use contracts::domain::a001_deal::Deal;
use leptos::prelude::*;

fn format_money(value: f64) -> String {
    if value.is_finite() {
        format!("${:.2}", value)
    } else {
        "—".to_string()
    }
}

#[component]
pub fn DealCard(deal: Deal, rank: usize) -> impl IntoView {
    let calories = deal.calories_display();
    let protein = deal.protein_display();
    let score = deal
        .value_score
        .map(|s| format!("{:.0}", s))
        .unwrap_or_else(|| "—".to_string());

    view! {
        <div class="deal-card">
            <div class="deal-card__header">
                <span class="deal-card__rank">"#" {rank}</span>
                <span class="deal-card__restaurant">{deal.restaurant_name.clone()}</span>
                <span class="deal-card__score">{score}</span>
            </div>
            <h3 class="deal-card__title">{deal.item_name.clone()}</h3>
            <p class="deal-card__price">{format_money(deal.price)}</p>
            {deal.description.clone().map(|d| view! { <p class="deal-card__description">{d}</p> })}
            <div class="deal-card__facts">
                {calories.map(|c| view! { <span>{c}</span> })}
                {protein.map(|p| view! { <span>{p}</span> })}
            </div>
        </div>
    }
}
