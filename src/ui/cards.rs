/// Card rendering for the inventory list
///
/// Visible records are laid out as a wrapping grid of cards. The two
/// empty states are distinct: an empty collection invites the user to
/// add their first file, while an empty projection of a non-empty
/// collection points at the active search/filters.

use iced::widget::{button, column, container, row, text, horizontal_space};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use crate::state::record::FileRecord;
use crate::Message;

const CARD_WIDTH: f32 = 310.0;

/// The message shown when there are no cards to render
pub fn empty_state_message(total_records: usize) -> &'static str {
    if total_records == 0 {
        "No files added yet. Add your first file using the form."
    } else {
        "No files match your search or filters."
    }
}

/// Render the visible records, or the appropriate empty state
pub fn file_list<'a>(
    visible: &[&'a FileRecord],
    total_records: usize,
) -> Element<'a, Message> {
    if visible.is_empty() {
        let placeholder = column![
            text("📂").size(48),
            text(empty_state_message(total_records)).size(15),
        ]
        .spacing(12)
        .align_x(Alignment::Center);

        return container(placeholder)
            .width(Length::Fill)
            .padding(40)
            .center_x(Length::Fill)
            .into();
    }

    let cards: Vec<Element<'a, Message>> = visible.iter().map(|r| card(r)).collect();
    Wrap::with_elements(cards)
        .spacing(12.0)
        .line_spacing(12.0)
        .into()
}

/// One record card: header with icon, name and actions, then details
fn card(record: &FileRecord) -> Element<'_, Message> {
    let header = row![
        text(record.file_type.icon()).size(20),
        text(&record.name).size(16),
        horizontal_space(),
        button(text("✏").size(14))
            .style(button::text)
            .on_press(Message::EditRequested(record.id.clone())),
        button(text("🗑").size(14))
            .style(button::text)
            .on_press(Message::DeleteRequested(record.id.clone())),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let mut details = column![
        detail("Location", text(&record.location)),
        detail("Type", text(record.file_type.label())),
        detail(
            "Date Added",
            text(record.date_added.format("%b %-d, %Y").to_string()),
        ),
    ]
    .spacing(6);

    if let Some(label) = record.category_label() {
        details = details.push(detail("Category", text(label)));
    }
    if !record.notes.is_empty() {
        details = details.push(detail("Notes", text(&record.notes)));
    }

    container(column![header, details].spacing(10))
        .style(container::rounded_box)
        .padding(14)
        .width(CARD_WIDTH)
        .into()
}

/// A labelled detail line within a card
fn detail<'a>(
    label: &'a str,
    value: iced::widget::Text<'a>,
) -> Element<'a, Message> {
    column![text(label).size(11), value.size(14)]
        .spacing(2)
        .into()
}
