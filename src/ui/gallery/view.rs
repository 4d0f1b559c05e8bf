// SPDX-License-Identifier: MPL-2.0
use super::{Message, State};
use crate::domain::media::{MediaItem, MediaKind};
use crate::i18n::fluent::I18n;
use crate::ui::components::{media_tile, screen_header};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::upload;
use crate::ui::widgets::SpinnerPhase;
use iced::widget::{button, mouse_area, scrollable, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Element, Length};

const COLUMNS: usize = 2;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub spinner: SpinnerPhase,
}

fn tab_key(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Photo => "gallery-tab-photos",
        MediaKind::Video => "gallery-tab-videos",
    }
}

fn tabs<'a>(ctx: &ViewContext<'a>, active: MediaKind) -> Element<'a, Message> {
    [MediaKind::Photo, MediaKind::Video]
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, kind| {
            row.push(
                button(
                    Container::new(Text::new(ctx.i18n.tr(tab_key(kind))).size(typography::BODY_LG))
                        .width(Length::Fill)
                        .align_x(alignment::Horizontal::Center),
                )
                .on_press(Message::TabSelected(kind))
                .width(Length::Fill)
                .padding(spacing::XS)
                .style(styles::button::tab(kind == active)),
            )
        })
        .into()
}

fn grid<'a>(ctx: &ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let items = state.filtered_items();
    if items.is_empty() {
        let tab = ctx.i18n.tr(tab_key(state.active_tab())).to_lowercase();
        return Container::new(
            Text::new(ctx.i18n.tr_with_args("gallery-empty", &[("tab", tab.as_str())]))
                .style(styles::text::muted),
        )
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .into();
    }

    items
        .chunks(COLUMNS)
        .fold(Column::new().spacing(spacing::SM), |column, chunk| {
            let row = chunk.iter().fold(Row::new().spacing(spacing::SM), |row, item| {
                row.push(
                    button(media_tile::view(
                        &item.url,
                        &item.description,
                        item.kind,
                        sizing::GRID_CELL,
                        sizing::GRID_CELL,
                    ))
                    .on_press(Message::ItemPressed(item.id.clone()))
                    .padding(0)
                    .style(styles::button::link),
                )
            });
            column.push(row)
        })
        .into()
}

fn detail<'a>(ctx: &ViewContext<'a>, item: &'a MediaItem) -> Element<'a, Message> {
    let date = item.taken_on.format("%Y-%m-%d").to_string();
    let byline = ctx
        .i18n
        .tr_with_args("gallery-by", &[("author", item.author.as_str()), ("date", date.as_str())]);

    Column::new()
        .spacing(spacing::SM)
        .push(media_tile::view(
            &item.url,
            &item.description,
            item.kind,
            sizing::MODAL_WIDTH - 2.0 * spacing::LG,
            sizing::PREVIEW_HEIGHT,
        ))
        .push(Text::new(item.description.as_str()).size(typography::BODY_LG))
        .push(Text::new(byline).size(typography::CAPTION).style(styles::text::muted))
        .push(
            button(Text::new(ctx.i18n.tr("gallery-close")).size(typography::BODY))
                .on_press(Message::CloseDetail)
                .style(styles::button::secondary),
        )
        .into()
}

/// Centers `panel` over a dimmed backdrop; pressing the backdrop sends `on_dismiss`.
fn modal<'a>(
    base: Element<'a, Message>,
    panel: Element<'a, Message>,
    on_dismiss: Message,
) -> Element<'a, Message> {
    let backdrop = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(on_dismiss);

    let centered = Container::new(
        Container::new(panel)
            .width(Length::Fixed(sizing::MODAL_WIDTH))
            .padding(spacing::LG)
            .style(styles::container::panel),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    Stack::new().push(base).push(backdrop).push(centered).into()
}

pub fn view<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let trailing: Option<Element<'a, Message>> = state.can_upload().then(|| {
        button(Text::new(ctx.i18n.tr("gallery-upload-button")).size(typography::BODY))
            .on_press(Message::OpenUpload)
            .style(styles::button::primary)
            .into()
    });

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(screen_header::view(
            ctx.i18n.tr("common-back"),
            Message::Back,
            ctx.i18n.tr("gallery-title"),
            trailing,
        ))
        .push(tabs(&ctx, state.active_tab()))
        .push(scrollable(grid(&ctx, state)).height(Length::Fill));

    let base: Element<'a, Message> = content.into();

    if let Some(form) = state.upload() {
        let panel = Column::new()
            .spacing(spacing::SM)
            .push(
                Row::new().push(Space::new().width(Length::Fill)).push(
                    button(Text::new(ctx.i18n.tr("gallery-close")).size(typography::BODY))
                        .on_press(Message::CloseUpload)
                        .style(styles::button::link),
                ),
            )
            .push(
                upload::view(
                    upload::ViewContext {
                        i18n: ctx.i18n,
                        spinner: ctx.spinner,
                    },
                    form,
                )
                .map(Message::Upload),
            );
        return modal(base, panel.into(), Message::CloseUpload);
    }

    if let Some(item) = state.selected() {
        let panel = detail(&ctx, item);
        return modal(base, panel, Message::CloseDetail);
    }

    base
}
