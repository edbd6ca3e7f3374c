/// Modal overlay helper
///
/// Stacks a dialog over the base view behind a dimmed backdrop.
/// Clicking the backdrop emits `on_blur`, which is how both dialogs
/// support dismiss-by-outside-click.

use iced::widget::{center, container, mouse_area, opaque, stack};
use iced::{Color, Element};

use crate::Message;

pub fn modal<'a>(
    base: impl Into<Element<'a, Message>>,
    dialog: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(
                center(opaque(dialog)).style(|_theme| container::Style {
                    background: Some(
                        Color {
                            a: 0.7,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                })
            )
            .on_press(on_blur)
        ),
    ]
    .into()
}
