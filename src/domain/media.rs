// SPDX-License-Identifier: MPL-2.0
//! Gallery media types.
//!
//! These types represent pure data without any presentation dependencies.

use chrono::NaiveDate;
use std::fmt;

/// Kind of a piece of club media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MediaKind {
    #[default]
    Photo,
    Video,
}

impl MediaKind {
    /// File extensions offered by the picker for this kind.
    #[must_use]
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            MediaKind::Photo => &["png", "jpg", "jpeg", "gif", "webp", "bmp"],
            MediaKind::Video => &["mp4", "mov", "m4v", "webm", "mkv", "avi"],
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Photo => write!(f, "photo"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

/// Identifier of a gallery item, unique within the gallery list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaId(String);

impl MediaId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A photo or video shown in the club gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub id: MediaId,
    pub kind: MediaKind,
    pub url: String,
    pub description: String,
    pub author: String,
    pub taken_on: NaiveDate,
}

/// Payload handed to the upload-complete callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedMedia {
    pub kind: MediaKind,
    pub uri: String,
    pub description: String,
}

/// Returns the items of `kind`, in their original order.
pub fn filter_by_kind(items: &[MediaItem], kind: MediaKind) -> Vec<&MediaItem> {
    items.iter().filter(|item| item.kind == kind).collect()
}

fn item(
    id: &str,
    kind: MediaKind,
    url: &str,
    description: &str,
    author: &str,
    (year, month, day): (i32, u32, u32),
) -> MediaItem {
    MediaItem {
        id: MediaId::new(id),
        kind,
        url: url.to_string(),
        description: description.to_string(),
        author: author.to_string(),
        taken_on: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
    }
}

/// The gallery's built-in sample content.
#[must_use]
pub fn sample_gallery() -> Vec<MediaItem> {
    vec![
        item(
            "1",
            MediaKind::Photo,
            "https://images.unsplash.com/photo-1560272564-c83b66b1ad12?w=600&q=80",
            "Team celebration after winning the championship",
            "John Smith",
            (2023, 5, 15),
        ),
        item(
            "2",
            MediaKind::Photo,
            "https://images.unsplash.com/photo-1579952363873-27f3bade9f55?w=600&q=80",
            "Training session",
            "Mike Johnson",
            (2023, 5, 10),
        ),
        item(
            "3",
            MediaKind::Video,
            "https://images.unsplash.com/photo-1624526267942-ab0c0e53d9c3?w=600&q=80",
            "Goal highlights from last match",
            "Sarah Williams",
            (2023, 5, 5),
        ),
        item(
            "4",
            MediaKind::Photo,
            "https://images.unsplash.com/photo-1517466787929-bc90951d0974?w=600&q=80",
            "Team photo before the match",
            "David Brown",
            (2023, 4, 28),
        ),
        item(
            "5",
            MediaKind::Video,
            "https://images.unsplash.com/photo-1574629810360-7efbbe195018?w=600&q=80",
            "Interview with the coach",
            "Emma Davis",
            (2023, 4, 20),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_gallery_has_unique_ids() {
        let items = sample_gallery();
        let mut ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn video_filter_keeps_original_order() {
        let items = sample_gallery();
        let ids: Vec<_> = filter_by_kind(&items, MediaKind::Video)
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(ids, ["3", "5"]);
    }

    #[test]
    fn photo_filter_keeps_original_order() {
        let items = sample_gallery();
        let ids: Vec<_> = filter_by_kind(&items, MediaKind::Photo)
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(ids, ["1", "2", "4"]);
    }

    #[test]
    fn sample_dates_are_real_dates() {
        let items = sample_gallery();
        assert_eq!(items[0].taken_on.to_string(), "2023-05-15");
        assert_eq!(items[4].taken_on.to_string(), "2023-04-20");
    }

    #[test]
    fn kinds_offer_distinct_extensions() {
        assert!(MediaKind::Photo.extensions().contains(&"jpg"));
        assert!(MediaKind::Video.extensions().contains(&"mp4"));
        assert!(!MediaKind::Photo.extensions().contains(&"mp4"));
    }
}
