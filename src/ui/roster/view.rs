// SPDX-License-Identifier: MPL-2.0
use super::{DetailTab, Message, State};
use crate::domain::player::{Player, PlayerMedia, PlayerStats};
use crate::i18n::fluent::I18n;
use crate::ui::components::{media_tile, screen_header};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, scrollable, text_input, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

const STATS_PER_ROW: usize = 3;
const MEDIA_WIDTH: f32 = 160.0;
const MEDIA_HEIGHT: f32 = 128.0;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

fn tab_key(tab: DetailTab) -> &'static str {
    match tab {
        DetailTab::Stats => "roster-tab-stats",
        DetailTab::Photos => "roster-tab-photos",
        DetailTab::Videos => "roster-tab-videos",
    }
}

fn number_badge<'a>(number: u8) -> Element<'a, Message> {
    Container::new(
        Text::new(format!("#{number}"))
            .size(typography::BODY)
            .style(styles::text::accent),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(styles::container::stat_tile)
    .into()
}

fn player_row<'a>(ctx: &ViewContext<'a>, player: &'a Player) -> Element<'a, Message> {
    let appearances = player.stats.appearances.to_string();
    let goals = player.stats.goals.to_string();
    let summary = ctx.i18n.tr_with_args(
        "roster-row-summary",
        &[("matches", appearances.as_str()), ("goals", goals.as_str())],
    );

    let details = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(
            Row::new()
                .align_y(alignment::Vertical::Center)
                .push(Text::new(player.name.as_str()).size(typography::TITLE_SM))
                .push(Space::new().width(Length::Fill))
                .push(number_badge(player.number)),
        )
        .push(Text::new(player.position.as_str()).style(styles::text::muted))
        .push(
            Text::new(summary)
                .size(typography::CAPTION)
                .style(styles::text::muted),
        );

    button(
        Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(media_tile::avatar(&player.name, sizing::AVATAR_SM))
            .push(details),
    )
    .on_press(Message::PlayerPressed(player.id.clone()))
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::card)
    .into()
}

fn list_view<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let players = state.filtered_players();

    let list: Element<'a, Message> = if players.is_empty() {
        Container::new(Text::new(ctx.i18n.tr("roster-empty")).style(styles::text::muted))
            .width(Length::Fill)
            .padding(spacing::XL)
            .align_x(alignment::Horizontal::Center)
            .into()
    } else {
        players
            .into_iter()
            .fold(Column::new().spacing(spacing::SM), |column, player| {
                column.push(player_row(&ctx, player))
            })
            .into()
    };

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(screen_header::view(
            ctx.i18n.tr("common-back"),
            Message::Exit,
            ctx.i18n.tr("roster-title"),
            None,
        ))
        .push(
            text_input(&ctx.i18n.tr("roster-search-placeholder"), state.query())
                .on_input(Message::QueryChanged)
                .padding(spacing::SM),
        )
        .push(scrollable(list).height(Length::Fill))
        .into()
}

fn stat_tile<'a>(value: String, label: String) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(value).size(typography::TITLE_MD))
            .push(Text::new(label).size(typography::CAPTION).style(styles::text::muted)),
    )
    .width(Length::Fill)
    .padding(spacing::SM)
    .align_x(alignment::Horizontal::Center)
    .style(styles::container::stat_tile)
    .into()
}

/// (value, label key) pairs in display order; role-specific stats only when present.
fn stat_entries(stats: &PlayerStats) -> Vec<(String, &'static str)> {
    let mut entries = vec![
        (stats.appearances.to_string(), "roster-stat-matches"),
        (stats.goals.to_string(), "roster-stat-goals"),
        (stats.assists.to_string(), "roster-stat-assists"),
    ];
    if let Some(clean_sheets) = stats.clean_sheets() {
        entries.push((clean_sheets.to_string(), "roster-stat-clean-sheets"));
    }
    if let Some(tackles) = stats.tackles() {
        entries.push((tackles.to_string(), "roster-stat-tackles"));
    }
    entries.push((format!("{}%", stats.pass_accuracy), "roster-stat-pass-accuracy"));
    entries
}

fn stats_grid<'a>(ctx: &ViewContext<'a>, stats: &PlayerStats) -> Element<'a, Message> {
    stat_entries(stats)
        .chunks(STATS_PER_ROW)
        .fold(Column::new().spacing(spacing::SM), |column, chunk| {
            let row = chunk
                .iter()
                .fold(Row::new().spacing(spacing::SM), |row, (value, key)| {
                    row.push(stat_tile(value.clone(), ctx.i18n.tr(key)))
                });
            column.push(row)
        })
        .into()
}

fn media_card<'a>(media: &PlayerMedia) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(media_tile::view(
            media.preview_url(),
            &media.title,
            media.kind,
            MEDIA_WIDTH,
            MEDIA_HEIGHT,
        ))
        .push(Text::new(media.title.clone()).size(typography::BODY_SM))
        .into()
}

fn media_strip<'a>(ctx: &ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let media = state.media_for_tab();
    if media.is_empty() {
        let tab = ctx.i18n.tr(tab_key(state.detail_tab())).to_lowercase();
        return Text::new(ctx.i18n.tr_with_args("roster-media-empty", &[("tab", tab.as_str())]))
            .style(styles::text::muted)
            .into();
    }

    let strip = media
        .into_iter()
        .fold(Row::new().spacing(spacing::MD), |row, item| row.push(media_card(item)));
    scrollable(strip)
        .direction(Direction::Horizontal(Scrollbar::new()))
        .into()
}

fn detail_tabs<'a>(ctx: &ViewContext<'a>, active: DetailTab) -> Element<'a, Message> {
    DetailTab::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, tab| {
            row.push(
                button(
                    Container::new(Text::new(ctx.i18n.tr(tab_key(tab))).size(typography::BODY))
                        .width(Length::Fill)
                        .align_x(alignment::Horizontal::Center),
                )
                .on_press(Message::TabSelected(tab))
                .width(Length::Fill)
                .padding(spacing::XS)
                .style(styles::button::tab(tab == active)),
            )
        })
        .into()
}

fn detail_view<'a>(
    ctx: ViewContext<'a>,
    state: &'a State,
    player: &'a Player,
) -> Element<'a, Message> {
    let profile = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(media_tile::avatar(&player.name, sizing::AVATAR_LG))
        .push(Text::new(player.name.as_str()).size(typography::TITLE_LG))
        .push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(Text::new(player.position.as_str()).style(styles::text::muted))
                .push(number_badge(player.number)),
        );

    let body = match state.detail_tab() {
        DetailTab::Stats => stats_grid(&ctx, &player.stats),
        DetailTab::Photos | DetailTab::Videos => media_strip(&ctx, state),
    };

    let back = button(
        Text::new(format!("← {}", ctx.i18n.tr("roster-back-to-list"))).size(typography::BODY),
    )
    .on_press(Message::Back)
    .style(styles::button::link);

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(back)
        .push(
            scrollable(
                Column::new()
                    .spacing(spacing::LG)
                    .push(profile)
                    .push(detail_tabs(&ctx, state.detail_tab()))
                    .push(body),
            )
            .height(Length::Fill),
        )
        .into()
}

pub fn view<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    match state.selected() {
        Some(player) => detail_view(ctx, state, player),
        None => list_view(ctx, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::RoleStats;

    fn stats(role: RoleStats) -> PlayerStats {
        PlayerStats {
            appearances: 30,
            goals: 2,
            assists: 4,
            pass_accuracy: 81,
            role,
        }
    }

    fn keys(stats: &PlayerStats) -> Vec<&'static str> {
        stat_entries(stats).into_iter().map(|(_, key)| key).collect()
    }

    #[test]
    fn outfield_players_show_four_tiles() {
        assert_eq!(
            keys(&stats(RoleStats::Outfield)),
            [
                "roster-stat-matches",
                "roster-stat-goals",
                "roster-stat-assists",
                "roster-stat-pass-accuracy"
            ]
        );
    }

    #[test]
    fn defenders_add_clean_sheets_and_tackles() {
        let entries = stat_entries(&stats(RoleStats::Defender {
            clean_sheets: 10,
            tackles: 45,
        }));
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[3], ("10".to_string(), "roster-stat-clean-sheets"));
        assert_eq!(entries[4], ("45".to_string(), "roster-stat-tackles"));
    }

    #[test]
    fn goalkeepers_add_clean_sheets_only() {
        let keys = keys(&stats(RoleStats::Goalkeeper { clean_sheets: 12 }));
        assert!(keys.contains(&"roster-stat-clean-sheets"));
        assert!(!keys.contains(&"roster-stat-tackles"));
    }

    #[test]
    fn pass_accuracy_is_a_percentage() {
        let entries = stat_entries(&stats(RoleStats::Outfield));
        assert_eq!(entries.last().map(|(v, _)| v.as_str()), Some("81%"));
    }
}
