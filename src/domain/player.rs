// SPDX-License-Identifier: MPL-2.0
//! Player roster types and search.

use super::media::MediaKind;
use std::fmt;

/// Identifier of a player, unique within the roster.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerId(String);

impl PlayerId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Position-specific statistics.
///
/// Clean sheets only exist for defenders and goalkeepers; tackles only for
/// defenders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleStats {
    #[default]
    Outfield,
    Defender {
        clean_sheets: u32,
        tackles: u32,
    },
    Goalkeeper {
        clean_sheets: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerStats {
    pub appearances: u32,
    pub goals: u32,
    pub assists: u32,
    /// Percentage, 0..=100.
    pub pass_accuracy: u8,
    pub role: RoleStats,
}

impl PlayerStats {
    #[must_use]
    pub fn clean_sheets(&self) -> Option<u32> {
        match self.role {
            RoleStats::Defender { clean_sheets, .. } | RoleStats::Goalkeeper { clean_sheets } => {
                Some(clean_sheets)
            }
            RoleStats::Outfield => None,
        }
    }

    #[must_use]
    pub fn tackles(&self) -> Option<u32> {
        match self.role {
            RoleStats::Defender { tackles, .. } => Some(tackles),
            _ => None,
        }
    }
}

/// A photo or video attached to a player's profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerMedia {
    pub id: String,
    pub kind: MediaKind,
    pub url: String,
    /// Preview image for videos.
    pub thumbnail: Option<String>,
    pub title: String,
}

impl PlayerMedia {
    /// Image to show in a grid cell: the thumbnail when present, else the URL.
    #[must_use]
    pub fn preview_url(&self) -> &str {
        self.thumbnail.as_deref().unwrap_or(&self.url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: String,
    pub number: u8,
    pub avatar_url: String,
    pub stats: PlayerStats,
    pub media: Vec<PlayerMedia>,
}

impl Player {
    /// Media of `kind`, in profile order.
    pub fn media_of_kind(&self, kind: MediaKind) -> impl Iterator<Item = &PlayerMedia> {
        self.media.iter().filter(move |m| m.kind == kind)
    }

    /// Case-insensitive substring match on name or position.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.position.to_lowercase().contains(&query)
    }
}

/// Players matching `query`, in roster order. An empty query matches everyone.
pub fn filter_players<'a>(players: &'a [Player], query: &str) -> Vec<&'a Player> {
    if query.is_empty() {
        return players.iter().collect();
    }
    players.iter().filter(|p| p.matches(query)).collect()
}

fn avatar(seed: &str) -> String {
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={seed}")
}

fn photo(id: &str, url: &str, title: &str) -> PlayerMedia {
    PlayerMedia {
        id: id.to_string(),
        kind: MediaKind::Photo,
        url: url.to_string(),
        thumbnail: None,
        title: title.to_string(),
    }
}

fn video(id: &str, url: &str, thumbnail: &str, title: &str) -> PlayerMedia {
    PlayerMedia {
        id: id.to_string(),
        kind: MediaKind::Video,
        url: url.to_string(),
        thumbnail: Some(thumbnail.to_string()),
        title: title.to_string(),
    }
}

/// The roster's built-in sample players.
#[must_use]
pub fn sample_roster() -> Vec<Player> {
    vec![
        Player {
            id: PlayerId::new("1"),
            name: "Alex Johnson".into(),
            position: "Forward".into(),
            number: 9,
            avatar_url: avatar("alex"),
            stats: PlayerStats {
                appearances: 28,
                goals: 15,
                assists: 7,
                pass_accuracy: 78,
                role: RoleStats::Outfield,
            },
            media: vec![
                photo(
                    "m1",
                    "https://images.unsplash.com/photo-1579952363873-27f3bade9f55?w=400&q=80",
                    "Goal celebration",
                ),
                video(
                    "m2",
                    "https://example.com/video1.mp4",
                    "https://images.unsplash.com/photo-1574629810360-7efbbe195018?w=400&q=80",
                    "Hat-trick highlights",
                ),
            ],
        },
        Player {
            id: PlayerId::new("2"),
            name: "Sarah Martinez".into(),
            position: "Midfielder".into(),
            number: 8,
            avatar_url: avatar("sarah"),
            stats: PlayerStats {
                appearances: 30,
                goals: 5,
                assists: 12,
                pass_accuracy: 89,
                role: RoleStats::Outfield,
            },
            media: vec![photo(
                "m3",
                "https://images.unsplash.com/photo-1517466787929-bc90951d0974?w=400&q=80",
                "Training session",
            )],
        },
        Player {
            id: PlayerId::new("3"),
            name: "David Kim".into(),
            position: "Defender".into(),
            number: 4,
            avatar_url: avatar("david"),
            stats: PlayerStats {
                appearances: 27,
                goals: 1,
                assists: 3,
                pass_accuracy: 82,
                role: RoleStats::Defender {
                    clean_sheets: 10,
                    tackles: 45,
                },
            },
            media: vec![
                photo(
                    "m4",
                    "https://images.unsplash.com/photo-1560272564-c83b66b1ad12?w=400&q=80",
                    "Defensive action",
                ),
                video(
                    "m5",
                    "https://example.com/video2.mp4",
                    "https://images.unsplash.com/photo-1624526267942-ab0c0e53d9c3?w=400&q=80",
                    "Tackle compilation",
                ),
            ],
        },
        Player {
            id: PlayerId::new("4"),
            name: "Emma Wilson".into(),
            position: "Goalkeeper".into(),
            number: 1,
            avatar_url: avatar("emma"),
            stats: PlayerStats {
                appearances: 30,
                goals: 0,
                assists: 0,
                pass_accuracy: 75,
                role: RoleStats::Goalkeeper { clean_sheets: 12 },
            },
            media: vec![photo(
                "m6",
                "https://images.unsplash.com/photo-1431324155629-1a6deb1dec8d?w=400&q=80",
                "Penalty save",
            )],
        },
    ]
}
