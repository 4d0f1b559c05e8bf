// SPDX-License-Identifier: MPL-2.0
//! Title row with a leading back button and an optional trailing action.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Row, Space, Text};
use iced::{alignment, Element, Length};

pub fn view<'a, Message: Clone + 'a>(
    back_label: String,
    on_back: Message,
    title: String,
    trailing: Option<Element<'a, Message>>,
) -> Element<'a, Message> {
    let back = button(Text::new(format!("← {back_label}")).size(typography::BODY))
        .on_press(on_back)
        .style(styles::button::link);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(back)
        .push(Text::new(title).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill));

    if let Some(trailing) = trailing {
        row = row.push(trailing);
    }

    row.into()
}
