/// Toast notifications for mutation outcomes
///
/// A toast is shown after add/update/delete and auto-dismissed after a
/// fixed delay; the timer lives in the update loop, this module only
/// holds the data and renders the overlay box.

use iced::widget::{container, row, text};
use iced::{Alignment, Element};

use crate::Message;

/// How long a toast stays on screen
pub const DISMISS_AFTER: std::time::Duration = std::time::Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Toast {
            message: message.into(),
            kind: ToastKind::Success,
        }
    }

    /// Deletions get the warning treatment, like the success toasts'
    /// louder sibling
    pub fn warning(message: impl Into<String>) -> Self {
        Toast {
            message: message.into(),
            kind: ToastKind::Warning,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.kind {
            ToastKind::Success => "✅",
            ToastKind::Warning => "⚠️",
        }
    }
}

pub fn view(toast: &Toast) -> Element<'_, Message> {
    container(
        row![text(toast.icon()), text(&toast.message).size(14)]
            .spacing(8)
            .align_y(Alignment::Center),
    )
    .style(container::rounded_box)
    .padding([10, 16])
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_icons() {
        assert_eq!(Toast::success("File added successfully!").icon(), "✅");
        assert_eq!(Toast::warning("File deleted successfully!").icon(), "⚠️");
    }
}
