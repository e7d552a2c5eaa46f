use super::{
    components::{QuickActions, StatsGrid},
    view_model::{use_dashboard_view_model, DashboardViewModel},
};
use crate::{
    components::{
        error::ErrorMessage,
        layout::{LoadingSpinner, SpinnerSize},
    },
    state::page::LoadStatus,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    create_effect(move |_| spawn_local(vm.refresh()));
    view! { <DashboardView vm=vm/> }
}

#[component]
fn DashboardView(vm: DashboardViewModel) -> impl IntoView {
    let state = vm.state;
    let stats = Signal::derive(move || state.with(|s| s.data));

    move || match state.with(|s| s.status) {
        LoadStatus::Loading => {
            view! { <LoadingSpinner size=SpinnerSize::Lg message="Loading dashboard..."/> }
                .into_view()
        }
        LoadStatus::Error => {
            let message = state.with(|s| s.error_message()).unwrap_or_default();
            view! {
                <ErrorMessage
                    message=message
                    on_retry=Callback::new(move |_| spawn_local(vm.refresh()))
                />
            }
            .into_view()
        }
        LoadStatus::Ready => view! {
            <div class="space-y-8">
                <div>
                    <h2 class="text-2xl font-bold text-fg">"Dashboard"</h2>
                    <p class="mt-1 text-sm text-fg-muted">"Overview of your HR management system"</p>
                </div>
                <StatsGrid stats=stats/>
                <QuickActions/>
            </div>
        }
        .into_view(),
    }
}
