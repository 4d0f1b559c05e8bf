// SPDX-License-Identifier: MPL-2.0
//! Image tiles and avatars.
//!
//! Remote URLs are never fetched: a tinted placeholder with a caption stands
//! in for them. Files picked from the local disk are shown as real images.

use crate::domain::media::MediaKind;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::styles;
use iced::widget::{container, image, text, Column, Container, Stack, Text};
use iced::{alignment, Border, Element, Length, Theme};
use std::path::Path;

/// Returns `true` when `uri` points at a readable file on this machine.
#[must_use]
pub fn is_local_file(uri: &str) -> bool {
    !uri.contains("://") && Path::new(uri).is_file()
}

/// Shows `uri` at the given size, with a play marker for videos.
pub fn view<'a, Message: 'a>(
    uri: &str,
    caption: &str,
    kind: MediaKind,
    width: f32,
    height: f32,
) -> Element<'a, Message> {
    let base: Element<'a, Message> = if kind == MediaKind::Photo && is_local_file(uri) {
        image(image::Handle::from_path(uri))
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .content_fit(iced::ContentFit::Cover)
            .into()
    } else {
        placeholder(caption, width, height)
    };

    if kind == MediaKind::Video {
        Stack::new().push(base).push(play_marker(width, height)).into()
    } else {
        base
    }
}

fn placeholder<'a, Message: 'a>(caption: &str, width: f32, height: f32) -> Element<'a, Message> {
    Container::new(
        Text::new(caption.to_string()).size(typography::CAPTION),
    )
    .padding(spacing::XS)
    .width(Length::Fixed(width))
    .height(Length::Fixed(height))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(styles::container::media_placeholder)
    .into()
}

fn play_marker<'a, Message: 'a>(width: f32, height: f32) -> Element<'a, Message> {
    Container::new(
        Container::new(Text::new("▶").size(typography::BODY_LG).style(|_theme: &Theme| {
            text::Style {
                color: Some(palette::WHITE),
            }
        }))
        .padding([spacing::XXS, spacing::XS])
        .style(|_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(iced::Color {
                a: 0.5,
                ..palette::BLACK
            })),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }),
    )
    .width(Length::Fixed(width))
    .height(Length::Fixed(height))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}

/// Up to two uppercase initials from a display name.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Round avatar showing the person's initials.
pub fn avatar<'a, Message: 'a>(name: &str, size: f32) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .align_x(alignment::Horizontal::Center)
            .push(Text::new(initials(name)).size(size / 2.5).style(|_theme: &Theme| {
                text::Style {
                    color: Some(palette::WHITE),
                }
            })),
    )
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(|_theme: &Theme| container::Style {
        background: Some(iced::Background::Color(palette::PRIMARY_600)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("Sarah Martinez"), "SM");
        assert_eq!(initials("emma"), "E");
        assert_eq!(initials("Jean Paul Gaultier"), "JP");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn remote_urls_are_not_local_files() {
        assert!(!is_local_file("https://images.unsplash.com/photo.jpg"));
        assert!(!is_local_file("file:///tmp/x.png"));
    }

    #[test]
    fn existing_path_is_local() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(is_local_file(file.path().to_str().unwrap()));
    }
}
