// SPDX-License-Identifier: MPL-2.0
//! Recent club activity shown on the dashboard.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Photo,
    Video,
    News,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub id: String,
    pub kind: ActivityKind,
    pub title: String,
    /// Pre-formatted relative time, e.g. "2 hours ago".
    pub time: String,
}

impl Activity {
    fn new(id: &str, kind: ActivityKind, title: &str, time: &str) -> Self {
        Self {
            id: id.to_string(),
            kind,
            title: title.to_string(),
            time: time.to_string(),
        }
    }
}

#[must_use]
pub fn sample_activities() -> Vec<Activity> {
    vec![
        Activity::new("1", ActivityKind::Photo, "Team Photo Session", "2 hours ago"),
        Activity::new("2", ActivityKind::Video, "Match Highlights", "1 day ago"),
        Activity::new("3", ActivityKind::News, "Upcoming Tournament", "3 days ago"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_feed_is_newest_first() {
        let feed = sample_activities();
        let titles: Vec<_> = feed.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Team Photo Session", "Match Highlights", "Upcoming Tournament"]
        );
        assert_eq!(feed[2].kind, ActivityKind::News);
    }
}
