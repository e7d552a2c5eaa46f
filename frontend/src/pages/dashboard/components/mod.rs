pub mod quick_actions;
pub mod stats;

pub use quick_actions::QuickActions;
pub use stats::StatsGrid;
