// SPDX-License-Identifier: MPL-2.0
//! Navigation service.
//!
//! Screens never switch views themselves: they emit route strings, and the
//! shell hands them to [`navigate`]. Routes without a screen in this app are
//! logged and otherwise ignored.

use std::fmt;

/// A destination reachable from the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    PlayerProfiles,
    MediaGallery,
    ClubInfo,
    UserProfile,
    Notifications,
    Activity(String),
}

impl Route {
    /// Parses a route string such as `/media-gallery` or `/activity/2`.
    #[must_use]
    pub fn parse(route: &str) -> Option<Self> {
        match route {
            "/player-profiles" => Some(Route::PlayerProfiles),
            "/media-gallery" => Some(Route::MediaGallery),
            "/club-info" => Some(Route::ClubInfo),
            "/user-profile" => Some(Route::UserProfile),
            "/notifications" => Some(Route::Notifications),
            other => other
                .strip_prefix("/activity/")
                .filter(|id| !id.is_empty() && !id.contains('/'))
                .map(|id| Route::Activity(id.to_string())),
        }
    }

    /// Returns `true` when this app has a screen for the route.
    #[must_use]
    pub fn has_screen(&self) -> bool {
        matches!(self, Route::PlayerProfiles | Route::MediaGallery)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::PlayerProfiles => f.write_str("/player-profiles"),
            Route::MediaGallery => f.write_str("/media-gallery"),
            Route::ClubInfo => f.write_str("/club-info"),
            Route::UserProfile => f.write_str("/user-profile"),
            Route::Notifications => f.write_str("/notifications"),
            Route::Activity(id) => write!(f, "/activity/{id}"),
        }
    }
}

/// Logs the navigation request and resolves it.
pub fn navigate(route: &str) -> Option<Route> {
    tracing::info!("Navigating to {route}");
    let parsed = Route::parse(route);
    match &parsed {
        None => tracing::warn!(route, "unknown route"),
        Some(route) if !route.has_screen() => {
            tracing::debug!(%route, "route has no screen yet");
        }
        Some(_) => {}
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::dashboard;

    #[test]
    fn dashboard_routes_parse() {
        let routes = [
            (dashboard::ROUTE_PLAYER_PROFILES, Route::PlayerProfiles),
            (dashboard::ROUTE_MEDIA_GALLERY, Route::MediaGallery),
            (dashboard::ROUTE_CLUB_INFO, Route::ClubInfo),
            (dashboard::ROUTE_USER_PROFILE, Route::UserProfile),
            (dashboard::ROUTE_NOTIFICATIONS, Route::Notifications),
        ];
        for (raw, expected) in routes {
            assert_eq!(Route::parse(raw), Some(expected));
        }
    }

    #[test]
    fn activity_routes_carry_the_id() {
        assert_eq!(Route::parse("/activity/2"), Some(Route::Activity("2".into())));
        assert_eq!(Route::Activity("7".into()).to_string(), "/activity/7");
    }

    #[test]
    fn unknown_routes_do_not_parse() {
        for raw in ["", "/", "/settings", "/activity/", "/activity/1/edit", "club-info"] {
            assert_eq!(Route::parse(raw), None, "{raw:?}");
        }
    }

    #[test]
    fn display_round_trips() {
        for route in [Route::ClubInfo, Route::Notifications, Route::Activity("3".into())] {
            assert_eq!(Route::parse(&route.to_string()), Some(route));
        }
    }

    #[test]
    fn only_roster_and_gallery_have_screens() {
        assert!(Route::PlayerProfiles.has_screen());
        assert!(Route::MediaGallery.has_screen());
        assert!(!Route::ClubInfo.has_screen());
        assert!(!Route::Activity("1".into()).has_screen());
    }
}
