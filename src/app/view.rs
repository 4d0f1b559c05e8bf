// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Picks the body for the session phase and current screen, then lays the
//! toast overlay on top of it.

use super::{Message, Screen, Session};
use crate::config::ClubConfig;
use crate::domain::activity::Activity;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{self, Toast};
use crate::ui::widgets::SpinnerPhase;
use crate::ui::{auth, dashboard, gallery, roster, splash, styles};
use iced::widget::{Column, Container, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub club: &'a ClubConfig,
    pub session: &'a Session,
    pub screen: &'a Screen,
    pub auth: &'a auth::State,
    pub notifications: &'a notifications::Manager,
    pub spinner: SpinnerPhase,
    pub activities: &'a [Activity],
}

/// Renders the current application view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let body: Element<'_, Message> = match ctx.session {
        Session::Checking => splash::view(splash::ViewContext {
            i18n: ctx.i18n,
            club_name: &ctx.club.club_name,
            spinner: ctx.spinner,
        }),
        Session::SignedOut => with_header(
            &ctx,
            auth::view(
                auth::ViewContext {
                    i18n: ctx.i18n,
                    club_name: &ctx.club.club_name,
                },
                ctx.auth,
            )
            .map(Message::Auth),
        ),
        Session::SignedIn { .. } => with_header(&ctx, view_screen(&ctx)),
    };

    Stack::new()
        .push(
            Container::new(body)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}

fn with_header<'a>(ctx: &ViewContext<'a>, content: Element<'a, Message>) -> Element<'a, Message> {
    let band = Container::new(Text::new(ctx.club.club_name.as_str()).size(typography::TITLE_SM))
        .width(Length::Fill)
        .padding([spacing::SM, spacing::LG])
        .align_x(alignment::Horizontal::Left)
        .style(styles::container::header);

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(band)
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into()
}

fn view_screen<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.screen {
        Screen::Dashboard => dashboard::view(dashboard::ViewContext {
            i18n: ctx.i18n,
            username: &ctx.club.display_name,
            team_name: &ctx.club.team_name,
            notification_count: ctx.club.notification_count,
            activities: ctx.activities,
        })
        .map(Message::Dashboard),
        Screen::Roster(state) => {
            roster::view(roster::ViewContext { i18n: ctx.i18n }, state).map(Message::Roster)
        }
        Screen::Gallery(state) => gallery::view(
            gallery::ViewContext {
                i18n: ctx.i18n,
                spinner: ctx.spinner,
            },
            state,
        )
        .map(Message::Gallery),
    }
}
