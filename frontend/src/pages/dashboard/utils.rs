use crate::api::{AttendanceRecord, AttendanceStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_employees: usize,
    pub total_attendance_records: usize,
    pub present_today: usize,
    pub absent_today: usize,
}

/// `today` is compared verbatim against each record's date string.
pub fn compute_dashboard_stats(
    employee_count: usize,
    records: &[AttendanceRecord],
    today: &str,
) -> DashboardStats {
    let count_today = |status: AttendanceStatus| {
        records
            .iter()
            .filter(|r| r.date == today && r.status == status)
            .count()
    };
    DashboardStats {
        total_employees: employee_count,
        total_attendance_records: records.len(),
        present_today: count_today(AttendanceStatus::Present),
        absent_today: count_today(AttendanceStatus::Absent),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: usize,
    pub icon: &'static str,
    pub tone: &'static str,
}

pub fn stat_cards(stats: &DashboardStats) -> [StatCard; 4] {
    [
        StatCard {
            title: "Total Employees",
            value: stats.total_employees,
            icon: "👥",
            tone: "text-status-info-text",
        },
        StatCard {
            title: "Total Attendance Records",
            value: stats.total_attendance_records,
            icon: "📊",
            tone: "text-action-primary-bg",
        },
        StatCard {
            title: "Present Today",
            value: stats.present_today,
            icon: "✅",
            tone: "text-status-success-text",
        },
        StatCard {
            title: "Absent Today",
            value: stats.absent_today,
            icon: "❌",
            tone: "text-status-error-text",
        },
    ]
}
