use drive_core::model::{DashboardStats, Payout, School, SchoolId, SeriesPoint};

use crate::paths;
use crate::vm::badge_vm::BadgeVm;
use crate::vm::time_fmt::format_optional;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchoolRowVm {
    pub id: SchoolId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub trainers: u32,
    pub active: BadgeVm,
    pub href: String,
}

impl From<&School> for SchoolRowVm {
    fn from(school: &School) -> Self {
        Self {
            id: school.id,
            name: school.name.clone(),
            email: school.email.clone().unwrap_or_else(|| "-".into()),
            phone: school.phone.clone().unwrap_or_else(|| "-".into()),
            trainers: school.trainers_count,
            active: BadgeVm::active(school.is_active),
            href: paths::school_details(school.id),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayoutRowVm {
    pub id: String,
    pub trainer: String,
    pub amount: String,
    pub status: BadgeVm,
    pub requested_at: String,
}

impl From<&Payout> for PayoutRowVm {
    fn from(payout: &Payout) -> Self {
        Self {
            id: payout.id.to_string(),
            trainer: payout.trainer_name.clone(),
            amount: payout.amount.to_string(),
            status: BadgeVm::from(&payout.status),
            requested_at: format_optional(payout.requested_at.as_deref()),
        }
    }
}

//
// ─── DASHBOARD ─────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCardVm {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarVm {
    pub label: String,
    pub value: f64,
    /// Height as a percentage of the tallest bar.
    pub height_pct: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeriesVm {
    pub title: &'static str,
    pub bars: Vec<BarVm>,
}

impl ChartSeriesVm {
    /// Scale every point against the series maximum; an all-zero series stays flat.
    #[must_use]
    pub fn normalize(title: &'static str, points: &[SeriesPoint]) -> Self {
        let max = points
            .iter()
            .map(|p| p.value)
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max);
        let bars = points
            .iter()
            .map(|p| BarVm {
                label: p.label.clone(),
                value: p.value,
                height_pct: if max > 0.0 && p.value.is_finite() {
                    (p.value.max(0.0) / max * 100.0).min(100.0)
                } else {
                    0.0
                },
            })
            .collect();
        Self { title, bars }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardVm {
    pub cards: Vec<StatCardVm>,
    pub charts: Vec<ChartSeriesVm>,
}

impl From<&DashboardStats> for DashboardVm {
    fn from(stats: &DashboardStats) -> Self {
        Self {
            cards: vec![
                StatCardVm {
                    label: "Bookings",
                    value: stats.total_bookings.to_string(),
                },
                StatCardVm {
                    label: "Students",
                    value: stats.total_students.to_string(),
                },
                StatCardVm {
                    label: "Trainers",
                    value: stats.total_trainers.to_string(),
                },
                StatCardVm {
                    label: "Schools",
                    value: stats.total_schools.to_string(),
                },
                StatCardVm {
                    label: "Revenue",
                    value: stats.revenue.to_string(),
                },
            ],
            charts: vec![
                ChartSeriesVm::normalize("Bookings per month", &stats.bookings_by_month),
                ChartSeriesVm::normalize("Bookings by status", &stats.bookings_by_status),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(label: &str, value: f64) -> SeriesPoint {
        SeriesPoint {
            label: label.into(),
            value,
        }
    }

    #[test]
    fn bars_scale_against_series_max() {
        let series = ChartSeriesVm::normalize("t", &[point("Jan", 5.0), point("Feb", 20.0)]);
        let heights: Vec<_> = series.bars.iter().map(|b| b.height_pct).collect();
        assert_eq!(heights, vec![25.0, 100.0]);
    }

    #[test]
    fn all_zero_series_is_flat() {
        let series = ChartSeriesVm::normalize("t", &[point("Jan", 0.0), point("Feb", 0.0)]);
        assert!(series.bars.iter().all(|b| b.height_pct == 0.0));
        assert!(ChartSeriesVm::normalize("t", &[]).bars.is_empty());
    }
}
