use curriculum_core::{PhaseProgress, ProgressReport};

/// One row of the per-phase bar chart.
#[derive(Clone, Debug, PartialEq)]
pub struct PhaseRowVm {
    pub label: String,
    pub completed: u32,
    pub total: u32,
    pub count_str: String,
    /// Bar fill width as a percentage of the track, clamped to [0, 100].
    pub fill_percent: f64,
}

impl From<&PhaseProgress> for PhaseRowVm {
    fn from(phase: &PhaseProgress) -> Self {
        Self {
            label: format!("Phase {} · {}", phase.phase, phase.title),
            completed: phase.completed,
            total: phase.total,
            count_str: format!("{} / {}", phase.completed, phase.total),
            fill_percent: phase.percent().clamp(0.0, 100.0),
        }
    }
}

/// Display model for the stats view. All formatting happens here so the
/// component stays declarative.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardVm {
    pub overall_percent: u8,
    pub overall_percent_str: String,
    pub completed_str: String,
    pub days_remaining_str: String,
    pub phases: Vec<PhaseRowVm>,
}

#[must_use]
pub fn map_dashboard(report: &ProgressReport) -> DashboardVm {
    let days_remaining = report.days_remaining();
    // The estimate is approximate, so it is shown with a tilde until done.
    let days_remaining_str = if days_remaining > 0 {
        format!("~{days_remaining}")
    } else {
        "0".to_owned()
    };

    DashboardVm {
        overall_percent: report.overall_percent(),
        overall_percent_str: format!("{}%", report.overall_percent()),
        completed_str: format!("{} / {}", report.completed, report.total_activities),
        days_remaining_str,
        phases: report.phases.iter().map(PhaseRowVm::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curriculum_core::PhaseId;

    fn report(completed: u32, total: u32) -> ProgressReport {
        ProgressReport {
            total_activities: total,
            completed,
            phases: vec![PhaseProgress {
                phase: PhaseId::new(1),
                title: "Foundations".to_owned(),
                completed,
                total,
            }],
        }
    }

    #[test]
    fn empty_report_formats_zeroes() {
        let vm = map_dashboard(&report(0, 8));
        assert_eq!(vm.overall_percent_str, "0%");
        assert_eq!(vm.completed_str, "0 / 8");
        assert_eq!(vm.days_remaining_str, "~100");
    }

    #[test]
    fn complete_report_drops_the_tilde() {
        let vm = map_dashboard(&report(8, 8));
        assert_eq!(vm.overall_percent_str, "100%");
        assert_eq!(vm.days_remaining_str, "0");
    }

    #[test]
    fn empty_curriculum_shows_zero_days_remaining() {
        let vm = map_dashboard(&report(0, 0));
        assert_eq!(vm.overall_percent_str, "0%");
        assert_eq!(vm.days_remaining_str, "0");
    }

    #[test]
    fn phase_rows_carry_label_and_fill() {
        let vm = map_dashboard(&report(2, 4));
        let row = &vm.phases[0];
        assert_eq!(row.label, "Phase 1 · Foundations");
        assert_eq!(row.count_str, "2 / 4");
        assert!((row.fill_percent - 50.0).abs() < f64::EPSILON);
    }
}
