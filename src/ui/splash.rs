// SPDX-License-Identifier: MPL-2.0
//! Splash screen shown while the stored session is being checked.

use crate::i18n::fluent::I18n;
use crate::ui::components::media_tile;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::widgets::{AnimatedSpinner, SpinnerPhase};
use iced::widget::{container, Column, Container, Text};
use iced::{alignment, Background, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub club_name: &'a str,
    pub spinner: SpinnerPhase,
}

pub fn view<'a, Message: 'static>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(media_tile::avatar(ctx.club_name, sizing::AVATAR_LG))
        .push(
            Text::new(ctx.i18n.tr("splash-title"))
                .size(typography::TITLE_MD)
                .color(palette::WHITE),
        )
        .push(AnimatedSpinner::new(palette::WHITE, ctx.spinner).into_element());

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::PRIMARY_900)),
            ..Default::default()
        })
        .into()
}
