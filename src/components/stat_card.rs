use yew::prelude::*;

use crate::services::panels::StatCardData;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub card: StatCardData,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let card = &props.card;

    html! {
        <div class={card.variant.css_class()}>
            <span class="stat-title">{card.title}</span>
            <div class="stat-value-row">
                <span class="stat-value">{&card.value}</span>
                if !card.unit.is_empty() {
                    <span class="stat-unit">{card.unit}</span>
                }
            </div>
            if let Some(trend) = card.trend {
                <div class={if trend > 0.0 { "stat-trend up" } else { "stat-trend down" }}>
                    {format!("{} {}%", if trend > 0.0 { "↑" } else { "↓" }, trend.abs())}
                </div>
            }
        </div>
    }
}

/// Two-column grid of stat cards.
#[derive(Properties, PartialEq)]
pub struct StatGridProps {
    pub cards: Vec<StatCardData>,
}

#[function_component(StatGrid)]
pub fn stat_grid(props: &StatGridProps) -> Html {
    html! {
        <div class="stat-grid">
            { for props.cards.iter().map(|card| html! { <StatCard card={card.clone()} /> }) }
        </div>
    }
}
