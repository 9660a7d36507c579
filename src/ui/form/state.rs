use crate::ui::mvi::UiState;

/// Which input line has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Price,
}

/// Terminal outcome of a submission. Exactly one of the two texts exists,
/// so the success flag of the original result object is the variant tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted { message: String },
    Rejected { error: String },
}

/// Where the single-flight submission currently stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// POST outstanding; further submits and edits are ignored.
    Pending,
    Done(SubmitOutcome),
}

/// New-product form: two text fields plus the submission state machine.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub title: String,
    pub price: String,
    pub focused: FormField,
    pub phase: SubmitPhase,
}

impl UiState for FormState {}

impl FormState {
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, SubmitPhase::Pending)
    }

    /// Parsed price, if the field currently holds a valid number.
    pub fn parsed_price(&self) -> Option<f64> {
        self.price.trim().parse::<f64>().ok().filter(|p| *p >= 0.0)
    }
}
