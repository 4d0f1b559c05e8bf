// SPDX-License-Identifier: MPL-2.0
//! Signed-in home screen: team header, navigation tiles and activity feed.
//!
//! The dashboard is stateless. Every tile and activity row emits a route
//! string that the shell hands to the navigation service.

use crate::domain::activity::{Activity, ActivityKind};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

pub const ROUTE_PLAYER_PROFILES: &str = "/player-profiles";
pub const ROUTE_MEDIA_GALLERY: &str = "/media-gallery";
pub const ROUTE_CLUB_INFO: &str = "/club-info";
pub const ROUTE_USER_PROFILE: &str = "/user-profile";
pub const ROUTE_NOTIFICATIONS: &str = "/notifications";

/// Navigation tiles in display order: (label key, glyph, route).
const TILES: [(&str, &str, &str); 4] = [
    ("dashboard-tile-players", "👥", ROUTE_PLAYER_PROFILES),
    ("dashboard-tile-gallery", "🖼", ROUTE_MEDIA_GALLERY),
    ("dashboard-tile-club-info", "ℹ", ROUTE_CLUB_INFO),
    ("dashboard-tile-profile", "👤", ROUTE_USER_PROFILE),
];

#[must_use]
pub fn activity_route(activity: &Activity) -> String {
    format!("/activity/{}", activity.id)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Navigate(String),
    Logout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Navigate(String),
    Logout,
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Navigate(route) => Event::Navigate(route),
        Message::Logout => Event::Logout,
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub username: &'a str,
    pub team_name: &'a str,
    pub notification_count: u32,
    pub activities: &'a [Activity],
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let welcome = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.team_name.to_string()).size(typography::TITLE_MD))
        .push(
            Text::new(ctx.i18n.tr_with_args("dashboard-welcome", &[("name", ctx.username)]))
                .size(typography::BODY)
                .style(styles::text::muted),
        );

    let mut bell = Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .push(Text::new("🔔").size(typography::TITLE_SM));
    if ctx.notification_count > 0 {
        bell = bell.push(
            Container::new(Text::new(ctx.notification_count.to_string()).size(typography::CAPTION))
                .width(Length::Fixed(sizing::BADGE))
                .height(Length::Fixed(sizing::BADGE))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(styles::container::badge),
        );
    }

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(welcome)
        .push(Space::new().width(Length::Fill))
        .push(
            button(bell)
                .on_press(Message::Navigate(ROUTE_NOTIFICATIONS.to_string()))
                .style(styles::button::link),
        )
        .push(
            button(Text::new(ctx.i18n.tr("dashboard-logout")).size(typography::BODY))
                .on_press(Message::Logout)
                .style(styles::button::secondary),
        )
        .into()
}

fn tile<'a>(label: String, glyph: &'static str, route: &'static str) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(glyph).size(typography::TITLE_LG))
        .push(Text::new(label).size(typography::BODY_LG));

    button(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(Message::Navigate(route.to_string()))
    .width(Length::Fill)
    .height(Length::Fixed(sizing::TILE_HEIGHT))
    .style(styles::button::card)
    .into()
}

fn activity_glyph(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Photo => "🖼",
        ActivityKind::Video => "▶",
        ActivityKind::News => "ℹ",
    }
}

fn activity_row<'a>(activity: &'a Activity) -> Element<'a, Message> {
    let text = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(activity.title.as_str()).size(typography::BODY_LG))
        .push(
            Text::new(activity.time.as_str())
                .size(typography::CAPTION)
                .style(styles::text::muted),
        );

    button(
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Text::new(activity_glyph(activity.kind)).size(typography::TITLE_SM))
            .push(text),
    )
    .on_press(Message::Navigate(activity_route(activity)))
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(styles::button::card)
    .into()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let [a, b, c, d] = TILES.map(|(key, glyph, route)| (ctx.i18n.tr(key), glyph, route));

    let grid = Column::new()
        .spacing(spacing::MD)
        .push(
            Row::new()
                .spacing(spacing::MD)
                .push(tile(a.0, a.1, a.2))
                .push(tile(b.0, b.1, b.2)),
        )
        .push(
            Row::new()
                .spacing(spacing::MD)
                .push(tile(c.0, c.1, c.2))
                .push(tile(d.0, d.1, d.2)),
        );

    let feed = ctx
        .activities
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, activity| {
            column.push(activity_row(activity))
        });

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(header(&ctx))
        .push(grid)
        .push(Text::new(ctx.i18n.tr("dashboard-recent-activity")).size(typography::TITLE_SM))
        .push(feed);

    scrollable(content).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::activity::sample_activities;

    #[test]
    fn tiles_cover_the_four_destinations() {
        let routes: Vec<_> = TILES.iter().map(|(_, _, route)| *route).collect();
        assert_eq!(
            routes,
            [
                "/player-profiles",
                "/media-gallery",
                "/club-info",
                "/user-profile"
            ]
        );
    }

    #[test]
    fn activity_rows_link_to_activity_detail() {
        let feed = sample_activities();
        assert_eq!(activity_route(&feed[1]), "/activity/2");
    }

    #[test]
    fn messages_map_to_events() {
        assert_eq!(update(Message::Logout), Event::Logout);
        assert_eq!(
            update(Message::Navigate(ROUTE_NOTIFICATIONS.into())),
            Event::Navigate("/notifications".into())
        );
    }
}
