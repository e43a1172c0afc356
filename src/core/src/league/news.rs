use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NewsItemType {
    MatchReport,
    TransferRumor,
    Injury,
    LeagueUpdate,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewsItem {
    pub id: String,
    pub round: u8,
    pub headline: String,
    pub body: String,
    pub item_type: NewsItemType,
    pub published: NaiveDateTime,
}

impl NewsItem {
    pub fn league_update(id: String, round: u8, headline: String, body: String) -> Self {
        NewsItem {
            id,
            round,
            headline,
            body,
            item_type: NewsItemType::LeagueUpdate,
            published: chrono::Utc::now().naive_utc(),
        }
    }
}

/// Append-only, ordered news feed for the season.
#[derive(Debug, Default, Clone, Serialize)]
pub struct NewsCollection {
    items: Vec<NewsItem>,
}

impl NewsCollection {
    pub fn add(&mut self, item: NewsItem) {
        self.items.push(item);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
