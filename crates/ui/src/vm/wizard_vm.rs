use drive_core::WizardStep;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepState {
    Done,
    Active,
    Upcoming,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepVm {
    pub number: usize,
    pub title: &'static str,
    pub state: StepState,
}

impl StepVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.state {
            StepState::Done => "step step--done",
            StepState::Active => "step step--active",
            StepState::Upcoming => "step",
        }
    }
}

#[must_use]
pub fn map_steps(current: WizardStep) -> Vec<StepVm> {
    WizardStep::ALL
        .iter()
        .map(|step| StepVm {
            number: step.index() + 1,
            title: step.title(),
            state: match step.index().cmp(&current.index()) {
                std::cmp::Ordering::Less => StepState::Done,
                std::cmp::Ordering::Equal => StepState::Active,
                std::cmp::Ordering::Greater => StepState::Upcoming,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_before_current_are_done() {
        let steps = map_steps(WizardStep::SelectPackage);
        let states: Vec<_> = steps.iter().map(|s| s.state).collect();
        assert_eq!(
            states,
            vec![
                StepState::Done,
                StepState::Done,
                StepState::Active,
                StepState::Upcoming,
                StepState::Upcoming
            ]
        );
        assert_eq!(steps[2].number, 3);
    }
}
