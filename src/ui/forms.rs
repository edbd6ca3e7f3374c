/// The add/edit record form
///
/// The same `FormState` backs the sidebar "add" form and the edit modal;
/// the caller maps `FormEvent`s into its own message variants. Validation
/// is presence-only: a type, a name and a location are required.

use chrono::{Local, NaiveDate};
use iced::widget::{button, column, pick_list, text, text_input};
use iced::{Element, Length};

use crate::state::record::{Category, FileRecord, FileType};
use crate::Message;

/// A change to one form field
#[derive(Debug, Clone)]
pub enum FormEvent {
    TypeSelected(FileType),
    NameChanged(String),
    LocationChanged(String),
    CategorySelected(Category),
    NotesChanged(String),
    DateChanged(String),
}

/// Editable form fields. The date is kept as raw text so partial input
/// never fights the user; it is parsed on submit.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub file_type: Option<FileType>,
    pub name: String,
    pub location: String,
    pub category: Option<Category>,
    pub notes: String,
    pub date_added: String,
}

impl FormState {
    /// Blank form with the date prefilled with today
    pub fn for_today() -> Self {
        FormState {
            date_added: today_string(),
            ..FormState::default()
        }
    }

    /// Form prefilled from an existing record, for the edit modal
    pub fn from_record(record: &FileRecord) -> Self {
        FormState {
            file_type: Some(record.file_type),
            name: record.name.clone(),
            location: record.location.clone(),
            category: Category::from_value(&record.category),
            notes: record.notes.clone(),
            date_added: record.date_added.format("%Y-%m-%d").to_string(),
        }
    }

    pub fn apply(&mut self, event: FormEvent) {
        match event {
            FormEvent::TypeSelected(t) => self.file_type = Some(t),
            FormEvent::NameChanged(v) => self.name = v,
            FormEvent::LocationChanged(v) => self.location = v,
            FormEvent::CategorySelected(c) => self.category = Some(c),
            FormEvent::NotesChanged(v) => self.notes = v,
            FormEvent::DateChanged(v) => self.date_added = v,
        }
    }

    /// Presence check for the required fields
    pub fn is_complete(&self) -> bool {
        self.file_type.is_some()
            && !self.name.trim().is_empty()
            && !self.location.trim().is_empty()
    }

    /// Build a record from the form, or None while required fields are
    /// missing. An empty or unparseable date falls back to today.
    pub fn record(&self, id: String) -> Option<FileRecord> {
        let file_type = self.file_type?;
        if !self.is_complete() {
            return None;
        }
        let date_added = NaiveDate::parse_from_str(self.date_added.trim(), "%Y-%m-%d")
            .unwrap_or_else(|_| Local::now().date_naive());
        Some(FileRecord {
            id,
            file_type,
            name: self.name.clone(),
            location: self.location.clone(),
            category: self
                .category
                .map(|c| c.value().to_string())
                .unwrap_or_default(),
            notes: self.notes.clone(),
            date_added,
        })
    }

    /// Render the form fields and a submit button. `map` lifts field
    /// events into the caller's message variant.
    pub fn view<'a>(
        &'a self,
        submit_label: &'a str,
        map: fn(FormEvent) -> Message,
        submit: Message,
    ) -> Element<'a, Message> {
        column![
            field_label("Type *"),
            pick_list(FileType::ALL, self.file_type, move |t| {
                map(FormEvent::TypeSelected(t))
            })
            .placeholder("Select type")
            .width(Length::Fill),
            field_label("Name *"),
            text_input("e.g. Tax returns 2024", &self.name)
                .on_input(move |v| map(FormEvent::NameChanged(v))),
            field_label("Location *"),
            text_input("e.g. Cabinet A, shelf 2", &self.location)
                .on_input(move |v| map(FormEvent::LocationChanged(v))),
            field_label("Category"),
            pick_list(Category::ALL, self.category, move |c| {
                map(FormEvent::CategorySelected(c))
            })
            .placeholder("Select category")
            .width(Length::Fill),
            field_label("Notes"),
            text_input("Optional notes", &self.notes)
                .on_input(move |v| map(FormEvent::NotesChanged(v))),
            field_label("Date Added"),
            text_input("YYYY-MM-DD", &self.date_added)
                .on_input(move |v| map(FormEvent::DateChanged(v))),
            button(text(submit_label))
                .on_press_maybe(self.is_complete().then_some(submit))
                .padding([8, 16]),
        ]
        .spacing(8)
        .into()
    }
}

fn field_label(label: &str) -> Element<'_, Message> {
    text(label).size(13).into()
}

fn today_string() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
