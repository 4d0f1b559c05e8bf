// SPDX-License-Identifier: MPL-2.0
//! Text color styles.

use crate::ui::design_tokens::palette;
use iced::widget::text;
use iced::Theme;

/// Inline validation message under a form field.
pub fn field_error(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::ERROR_500),
    }
}

/// Secondary text: authors, dates, subtitles.
pub fn muted(theme: &Theme) -> text::Style {
    let color = if theme.extended_palette().is_dark {
        palette::GRAY_400
    } else {
        palette::GRAY_500
    };
    text::Style { color: Some(color) }
}

/// Emphasized figures (stat values, jersey numbers).
pub fn accent(theme: &Theme) -> text::Style {
    let color = if theme.extended_palette().is_dark {
        palette::PRIMARY_100
    } else {
        palette::PRIMARY_800
    };
    text::Style { color: Some(color) }
}
