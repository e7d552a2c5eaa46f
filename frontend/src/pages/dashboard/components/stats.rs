use crate::pages::dashboard::utils::{stat_cards, DashboardStats, StatCard};
use leptos::*;

#[component]
fn StatCardView(card: StatCard) -> impl IntoView {
    view! {
        <div class="rounded-lg bg-surface-elevated border border-border shadow-sm p-6">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm font-medium text-fg-muted mb-1">{card.title}</p>
                    <p class=format!("text-3xl font-bold {}", card.tone)>{card.value}</p>
                </div>
                <div class="w-16 h-16 bg-surface-muted rounded-full flex items-center justify-center">
                    <span class="text-3xl">{card.icon}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn StatsGrid(#[prop(into)] stats: Signal<DashboardStats>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
            {move || {
                stat_cards(&stats.get())
                    .into_iter()
                    .map(|card| view! { <StatCardView card=card/> })
                    .collect_view()
            }}
        </div>
    }
}
