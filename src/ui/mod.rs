/// UI building blocks
///
/// - cards.rs: the wrapping card grid and empty states
/// - forms.rs: the shared add/edit form
/// - modal.rs: dimmed-backdrop dialog overlay
/// - toast.rs: transient mutation-outcome notifications

pub mod cards;
pub mod forms;
pub mod modal;
pub mod toast;
