// SPDX-License-Identifier: MPL-2.0
//! Player roster: a searchable list and a per-player detail view.

mod view;

pub use view::{view, ViewContext};

use crate::domain::media::MediaKind;
use crate::domain::player::{self, Player, PlayerId, PlayerMedia};

/// Tab shown in the player detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Stats,
    Photos,
    Videos,
}

impl DetailTab {
    pub const ALL: [DetailTab; 3] = [DetailTab::Stats, DetailTab::Photos, DetailTab::Videos];

    /// Media kind listed by this tab, if it is a media tab.
    #[must_use]
    pub fn media_kind(self) -> Option<MediaKind> {
        match self {
            DetailTab::Stats => None,
            DetailTab::Photos => Some(MediaKind::Photo),
            DetailTab::Videos => Some(MediaKind::Video),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    PlayerPressed(PlayerId),
    TabSelected(DetailTab),
    /// Return from the detail view to the list.
    Back,
    /// Leave the roster for the dashboard.
    Exit,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    PlayerSelected(Player),
    Exit,
}

#[derive(Debug, Clone)]
pub struct State {
    players: Vec<Player>,
    query: String,
    selected: Option<Player>,
    detail_tab: DetailTab,
}

impl Default for State {
    fn default() -> Self {
        Self::new(player::sample_roster())
    }
}

impl State {
    #[must_use]
    pub fn new(players: Vec<Player>) -> Self {
        Self {
            players,
            query: String::new(),
            selected: None,
            detail_tab: DetailTab::default(),
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Player> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn detail_tab(&self) -> DetailTab {
        self.detail_tab
    }

    #[must_use]
    pub fn filtered_players(&self) -> Vec<&Player> {
        player::filter_players(&self.players, &self.query)
    }

    /// Shows the detail view for `id`. The detail tab is left as it was.
    pub fn select_player(&mut self, id: &PlayerId) -> Option<Player> {
        let found = self.players.iter().find(|p| &p.id == id)?.clone();
        tracing::debug!(player = %found.name, tab = ?self.detail_tab, "player selected");
        self.selected = Some(found.clone());
        Some(found)
    }

    pub fn back(&mut self) {
        self.selected = None;
    }

    /// Media of the selected player for the current tab; empty on the stats tab.
    #[must_use]
    pub fn media_for_tab(&self) -> Vec<&PlayerMedia> {
        match (self.selected.as_ref(), self.detail_tab.media_kind()) {
            (Some(player), Some(kind)) => player.media_of_kind(kind).collect(),
            _ => Vec::new(),
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::QueryChanged(query) => {
                self.query = query;
                Event::None
            }
            Message::PlayerPressed(id) => self
                .select_player(&id)
                .map_or(Event::None, Event::PlayerSelected),
            Message::TabSelected(tab) => {
                self.detail_tab = tab;
                Event::None
            }
            Message::Back => {
                self.back();
                Event::None
            }
            Message::Exit => Event::Exit,
        }
    }
}
