// SPDX-License-Identifier: MPL-2.0
//! Sign-in / sign-up form.
//!
//! The form owns its field values, per-field errors, mode and password
//! visibility. A successful submit emits [`Event::Authenticated`] and leaves
//! the fields as they are; the shell unmounts the form afterwards.

use crate::domain::auth::{self, AuthMode, Credentials, Field, FieldErrors, ValidatedCredentials};
use crate::i18n::fluent::I18n;
use crate::ui::components::media_tile;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, scrollable, text_input, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, Default)]
pub struct State {
    mode: AuthMode,
    fields: Credentials,
    errors: FieldErrors,
    show_password: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(Field, String),
    TogglePasswordVisibility,
    ToggleMode,
    Submit,
    /// The "Forgot Password?" link has no destination yet.
    ForgotPassword,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    Authenticated(ValidatedCredentials),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub club_name: &'a str,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    #[must_use]
    pub fn fields(&self) -> &Credentials {
        &self.fields
    }

    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub fn is_password_visible(&self) -> bool {
        self.show_password
    }

    /// Stores `value` and clears the error shown under that field.
    pub fn set_field(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
        self.errors.clear(field);
    }

    /// Switches between login and sign-up, discarding everything typed.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.fields = Credentials::default();
        self.errors = FieldErrors::default();
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Validates the form; on failure the errors replace the previous ones.
    pub fn submit(&mut self) -> Option<ValidatedCredentials> {
        match auth::validate(self.mode, &self.fields) {
            Ok(validated) => {
                self.errors = FieldErrors::default();
                tracing::debug!(mode = ?self.mode, email = validated.email(), "credentials validated");
                Some(validated)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::FieldChanged(field, value) => {
                self.set_field(field, value);
                Event::None
            }
            Message::TogglePasswordVisibility => {
                self.toggle_password_visibility();
                Event::None
            }
            Message::ToggleMode => {
                self.toggle_mode();
                Event::None
            }
            Message::Submit => self.submit().map_or(Event::None, Event::Authenticated),
            Message::ForgotPassword => {
                tracing::debug!("forgot password pressed");
                Event::None
            }
        }
    }
}

fn field_keys(field: Field) -> (&'static str, &'static str) {
    match field {
        Field::Username => ("auth-username-label", "auth-username-placeholder"),
        Field::Email => ("auth-email-label", "auth-email-placeholder"),
        Field::Password => ("auth-password-label", "auth-password-placeholder"),
        Field::ConfirmPassword => ("auth-confirm-password-label", "auth-confirm-password-placeholder"),
    }
}

fn field_view<'a>(ctx: &ViewContext<'a>, state: &'a State, field: Field) -> Element<'a, Message> {
    let (label_key, placeholder_key) = field_keys(field);
    let secure = matches!(field, Field::Password | Field::ConfirmPassword) && !state.show_password;

    let mut input = text_input(&ctx.i18n.tr(placeholder_key), state.fields.get(field))
        .on_input(move |value| Message::FieldChanged(field, value))
        .on_submit(Message::Submit)
        .secure(secure)
        .padding(spacing::SM)
        .size(typography::BODY_LG);
    if field == Field::Password {
        input = input.width(Length::Fill);
    }

    let input_row: Element<'a, Message> = if field == Field::Password {
        let toggle_key = if state.show_password {
            "auth-hide-password"
        } else {
            "auth-show-password"
        };
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(input)
            .push(
                button(Text::new(ctx.i18n.tr(toggle_key)).size(typography::BODY_SM))
                    .on_press(Message::TogglePasswordVisibility)
                    .style(styles::button::link),
            )
            .into()
    } else {
        input.into()
    };

    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(ctx.i18n.tr(label_key)).size(typography::BODY))
        .push(input_row);

    if let Some(error) = state.errors.get(field) {
        column = column.push(
            Text::new(ctx.i18n.tr(error.i18n_key()))
                .size(typography::BODY_SM)
                .style(styles::text::field_error),
        );
    }

    column.into()
}

pub fn view<'a>(ctx: ViewContext<'a>, state: &'a State) -> Element<'a, Message> {
    let signup = state.mode.is_signup();
    let (title_key, subtitle_key, submit_key, toggle_key) = if signup {
        ("auth-signup-title", "auth-signup-subtitle", "auth-signup-button", "auth-toggle-to-login")
    } else {
        ("auth-login-title", "auth-login-subtitle", "auth-login-button", "auth-toggle-to-signup")
    };

    let hero = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(media_tile::avatar(ctx.club_name, sizing::AVATAR_LG))
        .push(Text::new(ctx.i18n.tr("auth-hero-title")).size(typography::TITLE_LG))
        .push(
            Text::new(ctx.i18n.tr(subtitle_key))
                .size(typography::BODY_LG)
                .style(styles::text::muted),
        );

    let mut form = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(ctx.i18n.tr(title_key)).size(typography::TITLE_MD));

    for field in Field::ALL {
        let visible = match field {
            Field::Username | Field::ConfirmPassword => signup,
            Field::Email | Field::Password => true,
        };
        if visible {
            form = form.push(field_view(&ctx, state, field));
        }
    }

    form = form.push(
        button(
            Container::new(Text::new(ctx.i18n.tr(submit_key)).size(typography::BODY_LG))
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .on_press(Message::Submit)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::button::primary),
    );

    if !signup {
        form = form.push(centered(
            button(Text::new(ctx.i18n.tr("auth-forgot-password")).size(typography::BODY))
                .on_press(Message::ForgotPassword)
                .style(styles::button::link)
                .into(),
        ));
    }

    form = form.push(centered(
        button(Text::new(ctx.i18n.tr(toggle_key)).size(typography::BODY))
            .on_press(Message::ToggleMode)
            .style(styles::button::link)
            .into(),
    ));

    let card = Container::new(form)
        .padding(spacing::LG)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .style(styles::container::panel);

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(hero)
        .push(card)
        .push(Space::new().height(Length::Fixed(spacing::XL)));

    scrollable(content).into()
}

fn centered(element: Element<'_, Message>) -> Element<'_, Message> {
    container(element)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}
