use iced::alignment::Horizontal;
use iced::widget::{
    button, column, container, horizontal_space, pick_list, row, scrollable, stack, text,
    text_input,
};
use iced::{Alignment, Element, Length, Task, Theme};

mod state;
mod ui;

use state::query::{CategoryFilter, Query, SearchScope, SortKey, TypeFilter};
use state::record::FileRecord;
use state::store::Store;
use ui::forms::{FormEvent, FormState};
use ui::toast::Toast;

/// Main application state
struct FileCabinet {
    /// The persisted inventory collection
    store: Store,
    /// The active search/facet/sort projection
    query: Query,
    /// Facet selections staged in the toolbar, applied on click
    pending_type: TypeFilter,
    pending_category: CategoryFilter,
    /// The sidebar "add" form
    add_form: FormState,
    /// Open edit dialog, if any
    edit: Option<EditState>,
    /// Record id awaiting delete confirmation, if any
    pending_delete: Option<String>,
    /// Visible toast plus a sequence number so a stale dismiss timer
    /// never hides a newer toast
    toast: Option<Toast>,
    toast_seq: u64,
}

/// The edit dialog: the id being edited and its form fields
struct EditState {
    id: String,
    form: FormState,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// A field of the sidebar add form changed
    AddForm(FormEvent),
    /// User submitted the add form
    SubmitAdd,
    /// User clicked the edit button on a card
    EditRequested(String),
    /// A field of the edit dialog changed
    EditForm(FormEvent),
    /// User saved the edit dialog
    SubmitEdit,
    /// Edit dialog dismissed without saving
    CloseEdit,
    /// User clicked the delete button on a card
    DeleteRequested(String),
    /// Deletion confirmed in the dialog
    ConfirmDelete,
    /// Delete dialog dismissed
    CancelDelete,
    /// Search text or scope changed (applies immediately)
    SearchChanged(String),
    SearchScopeSelected(SearchScope),
    ClearSearch,
    /// Facet selections staged in the toolbar
    TypeFilterSelected(TypeFilter),
    CategoryFilterSelected(CategoryFilter),
    /// Copy the staged facets into the active query
    ApplyFilters,
    ClearFilters,
    SortSelected(SortKey),
    /// The dismiss timer for toast number `seq` fired
    ToastExpired(u64),
}

impl FileCabinet {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        // If this fails, we panic because the app cannot function
        // without its inventory file
        let store = Store::open()
            .expect("Failed to open the inventory file. Check permissions and disk space.");

        println!("🗂️  File Cabinet initialized with {} records", store.len());

        (
            FileCabinet {
                store,
                query: Query::default(),
                pending_type: TypeFilter::default(),
                pending_category: CategoryFilter::default(),
                add_form: FormState::for_today(),
                edit: None,
                pending_delete: None,
                toast: None,
                toast_seq: 0,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::AddForm(event) => {
                self.add_form.apply(event);
                Task::none()
            }
            Message::SubmitAdd => {
                let Some(record) = self.add_form.record(FileRecord::new_id()) else {
                    return Task::none();
                };
                if let Err(e) = self.store.add(record) {
                    eprintln!("⚠️  Failed to save inventory: {e}");
                }
                self.add_form = FormState::for_today();
                self.show_toast(Toast::success("File added successfully!"))
            }
            Message::EditRequested(id) => {
                if let Some(record) = self.store.get(&id) {
                    self.edit = Some(EditState {
                        form: FormState::from_record(record),
                        id,
                    });
                }
                Task::none()
            }
            Message::EditForm(event) => {
                if let Some(edit) = &mut self.edit {
                    edit.form.apply(event);
                }
                Task::none()
            }
            Message::SubmitEdit => {
                let Some(edit) = self.edit.take() else {
                    return Task::none();
                };
                let Some(record) = edit.form.record(edit.id) else {
                    return Task::none();
                };
                match self.store.update(record) {
                    Ok(true) => self.show_toast(Toast::success("File updated successfully!")),
                    Ok(false) => Task::none(),
                    Err(e) => {
                        eprintln!("⚠️  Failed to save inventory: {e}");
                        Task::none()
                    }
                }
            }
            Message::CloseEdit => {
                self.edit = None;
                Task::none()
            }
            Message::DeleteRequested(id) => {
                self.pending_delete = Some(id);
                Task::none()
            }
            Message::ConfirmDelete => {
                let Some(id) = self.pending_delete.take() else {
                    return Task::none();
                };
                match self.store.remove(&id) {
                    Ok(true) => self.show_toast(Toast::warning("File deleted successfully!")),
                    Ok(false) => Task::none(),
                    Err(e) => {
                        eprintln!("⚠️  Failed to save inventory: {e}");
                        Task::none()
                    }
                }
            }
            Message::CancelDelete => {
                self.pending_delete = None;
                Task::none()
            }
            Message::SearchChanged(search) => {
                self.query.search = search;
                Task::none()
            }
            Message::SearchScopeSelected(scope) => {
                self.query.scope = scope;
                Task::none()
            }
            Message::ClearSearch => {
                self.query.search.clear();
                self.query.scope = SearchScope::All;
                Task::none()
            }
            Message::TypeFilterSelected(filter) => {
                self.pending_type = filter;
                Task::none()
            }
            Message::CategoryFilterSelected(filter) => {
                self.pending_category = filter;
                Task::none()
            }
            Message::ApplyFilters => {
                self.query.type_filter = self.pending_type;
                self.query.category_filter = self.pending_category;
                Task::none()
            }
            Message::ClearFilters => {
                self.pending_type = TypeFilter::Any;
                self.pending_category = CategoryFilter::Any;
                self.query.type_filter = TypeFilter::Any;
                self.query.category_filter = CategoryFilter::Any;
                Task::none()
            }
            Message::SortSelected(sort) => {
                self.query.sort = sort;
                Task::none()
            }
            Message::ToastExpired(seq) => {
                if seq == self.toast_seq {
                    self.toast = None;
                }
                Task::none()
            }
        }
    }

    /// Show a toast and schedule its dismissal
    fn show_toast(&mut self, toast: Toast) -> Task<Message> {
        self.toast = Some(toast);
        self.toast_seq += 1;
        let seq = self.toast_seq;
        Task::perform(tokio::time::sleep(ui::toast::DISMISS_AFTER), move |_| {
            Message::ToastExpired(seq)
        })
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let visible = self.query.apply(self.store.records());

        let sidebar = container(scrollable(
            column![
                text("Add New File").size(18),
                self.add_form
                    .view("Add File", Message::AddForm, Message::SubmitAdd),
            ]
            .spacing(14),
        ))
        .style(container::rounded_box)
        .width(300)
        .padding(16);

        let search_bar = row![
            text_input("Search files...", &self.query.search)
                .on_input(Message::SearchChanged),
            pick_list(
                SearchScope::ALL,
                Some(self.query.scope),
                Message::SearchScopeSelected
            ),
            button(text("Clear"))
                .style(button::secondary)
                .on_press(Message::ClearSearch),
        ]
        .spacing(8);

        let filter_bar = row![
            pick_list(
                TypeFilter::ALL,
                Some(self.pending_type),
                Message::TypeFilterSelected
            ),
            pick_list(
                CategoryFilter::ALL,
                Some(self.pending_category),
                Message::CategoryFilterSelected
            ),
            button(text("Apply")).on_press(Message::ApplyFilters),
            button(text("Clear Filters"))
                .style(button::secondary)
                .on_press(Message::ClearFilters),
            horizontal_space(),
            text("Sort by").size(14),
            pick_list(SortKey::ALL, Some(self.query.sort), Message::SortSelected),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let listing = column![
            search_bar,
            filter_bar,
            text(format!("Your Files ({})", visible.len())).size(18),
            scrollable(ui::cards::file_list(&visible, self.store.len()))
                .height(Length::Fill),
        ]
        .spacing(12);

        let content = container(
            column![
                text("📋 Physical File Inventory").size(26),
                row![sidebar, listing].spacing(16).height(Length::Fill),
            ]
            .spacing(16),
        )
        .padding(16);

        let base: Element<Message> = match &self.toast {
            Some(toast) => stack![
                content,
                container(ui::toast::view(toast))
                    .width(Length::Fill)
                    .align_x(Horizontal::Right)
                    .padding(16),
            ]
            .into(),
            None => content.into(),
        };

        if let Some(edit) = &self.edit {
            let dialog = container(
                column![
                    row![
                        text("Edit File").size(18),
                        horizontal_space(),
                        button(text("✕"))
                            .style(button::text)
                            .on_press(Message::CloseEdit),
                    ]
                    .align_y(Alignment::Center),
                    edit.form
                        .view("Save Changes", Message::EditForm, Message::SubmitEdit),
                ]
                .spacing(12),
            )
            .style(container::rounded_box)
            .width(380)
            .padding(20);

            return ui::modal::modal(base, dialog, Message::CloseEdit);
        }

        if let Some(id) = &self.pending_delete {
            let name = self
                .store
                .get(id)
                .map(|r| r.name.as_str())
                .unwrap_or("this file");
            let dialog = container(
                column![
                    text("Delete File").size(18),
                    text(format!(
                        "Are you sure you want to delete \"{name}\"? \
                         This cannot be undone."
                    ))
                    .size(14),
                    row![
                        horizontal_space(),
                        button(text("Cancel"))
                            .style(button::secondary)
                            .on_press(Message::CancelDelete),
                        button(text("Delete"))
                            .style(button::danger)
                            .on_press(Message::ConfirmDelete),
                    ]
                    .spacing(8),
                ]
                .spacing(16),
            )
            .style(container::rounded_box)
            .width(380)
            .padding(20);

            return ui::modal::modal(base, dialog, Message::CancelDelete);
        }

        base
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application("File Cabinet", FileCabinet::update, FileCabinet::view)
        .theme(FileCabinet::theme)
        .window_size((1150.0, 780.0))
        .centered()
        .run_with(FileCabinet::new)
}
