// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn filled(background: Color, text_color: Color, rad: f32, shadow: iced::Shadow) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: background,
            width: 0.0,
            radius: rad.into(),
        },
        shadow,
        snap: true,
    }
}

/// Main call to action (Login, Sign Up, Upload).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => filled(palette::PRIMARY_800, WHITE, radius::MD, shadow::SM),
        button::Status::Hovered => filled(palette::PRIMARY_900, WHITE, radius::MD, shadow::MD),
        button::Status::Pressed => filled(palette::PRIMARY_900, WHITE, radius::MD, shadow::NONE),
        button::Status::Disabled => filled(palette::GRAY_400, WHITE, radius::MD, shadow::NONE),
    }
}

/// Secondary actions that should not compete with the primary button.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = !theme.extended_palette().is_dark;
    let (bg, text) = if is_light {
        (palette::GRAY_200, palette::GRAY_900)
    } else {
        (palette::GRAY_600, WHITE)
    };

    match status {
        button::Status::Active | button::Status::Pressed => {
            filled(bg, text, radius::MD, shadow::NONE)
        }
        button::Status::Hovered => button::Style {
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::MD.into(),
            },
            ..filled(bg, text, radius::MD, shadow::SM)
        },
        button::Status::Disabled => filled(bg, palette::GRAY_400, radius::MD, shadow::NONE),
    }
}

/// Tab in a segmented control (gallery photo/video, roster detail tabs).
pub fn tab(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if selected {
            let bg = match status {
                button::Status::Hovered => palette::PRIMARY_900,
                _ => palette::PRIMARY_800,
            };
            filled(bg, WHITE, radius::FULL, shadow::SM)
        } else {
            secondary(theme, status)
        }
    }
}

/// Text-only button (mode toggle, "Forgot Password?", back).
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let base = if theme.extended_palette().is_dark {
        palette::PRIMARY_100
    } else {
        palette::PRIMARY_600
    };
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_500,
        button::Status::Disabled => palette::GRAY_400,
        button::Status::Active => base,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Clickable card: dashboard tiles, activity rows, gallery cells, roster rows.
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let ext = theme.extended_palette();
    let bg = ext.background.weak.color;
    let text_color = ext.background.base.text;
    match status {
        button::Status::Hovered => button::Style {
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::LG.into(),
            },
            ..filled(bg, text_color, radius::LG, shadow::MD)
        },
        _ => filled(bg, text_color, radius::LG, shadow::SM),
    }
}
