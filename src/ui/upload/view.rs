// SPDX-License-Identifier: MPL-2.0
use super::{Message, State};
use crate::domain::media::MediaKind;
use crate::i18n::fluent::I18n;
use crate::ui::components::media_tile;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::{AnimatedSpinner, SpinnerPhase};
use iced::widget::{button, container, text_input, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub spinner: SpinnerPhase,
}

fn kind_key(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Photo => "media-kind-photo",
        MediaKind::Video => "media-kind-video",
    }
}

fn kind_toggle<'a>(ctx: &ViewContext<'a>, current: MediaKind) -> Element<'a, Message> {
    [MediaKind::Photo, MediaKind::Video]
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, kind| {
            row.push(
                button(
                    Container::new(Text::new(ctx.i18n.tr(kind_key(kind))).size(typography::BODY))
                        .width(Length::Fill)
                        .align_x(alignment::Horizontal::Center),
                )
                .on_press(Message::KindSelected(kind))
                .width(Length::Fill)
                .padding(spacing::XS)
                .style(styles::button::tab(kind == current)),
            )
        })
        .into()
}

fn pick_area<'a>(ctx: &ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let kind_name = ctx.i18n.tr(kind_key(state.kind()));

    if let Some(uri) = state.selected() {
        let preview = media_tile::view(
            uri,
            uri,
            state.kind(),
            sizing::MODAL_WIDTH - 2.0 * spacing::LG,
            sizing::PREVIEW_HEIGHT,
        );
        let clear = button(Text::new("×").size(typography::BODY_LG))
            .on_press(Message::ClearSelected)
            .padding([0.0, spacing::XS])
            .style(styles::button::secondary);

        return Stack::new()
            .push(preview)
            .push(
                Container::new(clear)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Right)
                    .padding(spacing::XS),
            )
            .into();
    }

    let prompt = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("⇪").size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr_with_args("upload-pick-prompt", &[("kind", kind_name.as_str())])));

    button(
        Container::new(prompt)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::PREVIEW_HEIGHT))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::pick_area),
    )
    .on_press(Message::PickMedia)
    .width(Length::Fill)
    .padding(0)
    .style(styles::button::link)
    .into()
}

fn progress_bar<'a>(ctx: &ViewContext<'a>, progress: u8) -> Element<'a, Message> {
    let filled = u16::from(progress.max(1));
    let empty = 100u16.saturating_sub(filled);

    let mut bar = Row::new().height(Length::Fixed(sizing::PROGRESS_BAR_HEIGHT)).push(
        Container::new(Space::new())
            .width(Length::FillPortion(filled))
            .height(Length::Fill)
            .style(styles::container::progress_fill),
    );
    if empty > 0 {
        bar = bar.push(Space::new().width(Length::FillPortion(empty)));
    }

    let percent = progress.to_string();
    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(Container::new(bar).style(styles::container::progress_track))
        .push(
            Text::new(ctx.i18n.tr_with_args("upload-progress", &[("percent", percent.as_str())]))
                .style(styles::text::accent),
        )
        .into()
}

pub fn view<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(ctx.i18n.tr("upload-title")).size(typography::TITLE_MD))
        .push(kind_toggle(&ctx, state.kind()))
        .push(pick_area(&ctx, state))
        .push(Text::new(ctx.i18n.tr("upload-description-label")).size(typography::BODY))
        .push(
            text_input(&ctx.i18n.tr("upload-description-placeholder"), state.description())
                .on_input(Message::DescriptionChanged)
                .padding(spacing::SM),
        );

    if state.is_uploading() {
        content = content.push(progress_bar(&ctx, state.progress()));
    }

    let submit_label: Element<'a, Message> = if state.is_uploading() {
        AnimatedSpinner::new(palette::WHITE, ctx.spinner)
            .size(sizing::ICON_MD)
            .into_element()
    } else {
        let kind_name = ctx.i18n.tr(kind_key(state.kind()));
        Text::new(ctx.i18n.tr_with_args("upload-submit", &[("kind", kind_name.as_str())]))
            .size(typography::BODY_LG)
            .into()
    };

    let mut submit = button(
        container(submit_label)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::primary);
    if !state.is_uploading() {
        submit = submit.on_press(Message::Submit);
    }

    content.push(submit).into()
}
