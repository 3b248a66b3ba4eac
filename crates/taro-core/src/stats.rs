//! Aggregate statistics over a reading history.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};

use crate::reading::Reading;
use crate::spread::SpreadCategory;

/// Number of days covered by [`ReadingStats::last_seven_days`].
pub const ACTIVITY_DAYS: u64 = 7;

/// Summary of a reading history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingStats {
    /// Total number of readings.
    pub total: usize,
    /// Number of favorite readings.
    pub favorites: usize,
    /// Readings per spread, most used first. Spreads never used are omitted.
    pub distribution: Vec<(SpreadCategory, usize)>,
    /// The card name that appears most often across all draws.
    pub most_frequent_card: Option<String>,
    /// Readings per UTC day, oldest first, ending at the reference day.
    pub last_seven_days: Vec<(NaiveDate, usize)>,
}

impl ReadingStats {
    /// Compute statistics, using `today` as the last day of the activity window.
    pub fn compute(readings: &[Reading], today: NaiveDate) -> Self {
        let mut per_spread: HashMap<SpreadCategory, usize> = HashMap::new();
        let mut per_card: HashMap<&str, usize> = HashMap::new();
        let mut per_day: HashMap<NaiveDate, usize> = HashMap::new();

        for reading in readings {
            *per_spread.entry(reading.spread()).or_default() += 1;
            for card in reading.cards() {
                *per_card.entry(card.name()).or_default() += 1;
            }
            *per_day.entry(reading.created_at().date_naive()).or_default() += 1;
        }

        let mut distribution: Vec<(SpreadCategory, usize)> = per_spread.into_iter().collect();
        distribution.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.index().cmp(&b.0.index())));

        let most_frequent_card = per_card
            .into_iter()
            .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(a.0)))
            .map(|(name, _)| name.to_string());

        let last_seven_days = (0..ACTIVITY_DAYS)
            .rev()
            .filter_map(|back| today.checked_sub_days(Days::new(back)))
            .map(|day| (day, per_day.get(&day).copied().unwrap_or_default()))
            .collect();

        Self {
            total: readings.len(),
            favorites: readings.iter().filter(|r| r.is_favorite()).count(),
            distribution,
            most_frequent_card,
            last_seven_days,
        }
    }

    /// The spread used most often, if any readings exist.
    pub fn most_popular_spread(&self) -> Option<SpreadCategory> {
        self.distribution.first().map(|(spread, _)| *spread)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::card::{Card, Draw};

    fn reading(spread: SpreadCategory, cards: &[&str], day: u32) -> Reading {
        Reading::with_timestamp(
            "Anna",
            spread,
            Draw::new(cards.iter().map(|n| Card::new(*n, false)).collect()),
            "text",
            Utc.with_ymd_and_hms(2025, 12, day, 12, 0, 0).unwrap(),
        )
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 10).unwrap()
    }

    #[test]
    fn empty_history() {
        let stats = ReadingStats::compute(&[], today());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.favorites, 0);
        assert!(stats.distribution.is_empty());
        assert_eq!(stats.most_popular_spread(), None);
        assert_eq!(stats.most_frequent_card, None);
        assert_eq!(stats.last_seven_days.len(), 7);
        assert!(stats.last_seven_days.iter().all(|(_, n)| *n == 0));
    }

    #[test]
    fn counts_and_distribution() {
        let mut fav = reading(SpreadCategory::Love, &["The Fool", "Death", "The Sun"], 10);
        fav.toggle_favorite();
        let readings = vec![
            fav,
            reading(SpreadCategory::Career, &["The Fool", "The Star", "The Moon"], 9),
            reading(SpreadCategory::Love, &["Justice", "The Fool", "Strength"], 1),
        ];
        let stats = ReadingStats::compute(&readings, today());
        assert_eq!(stats.total, 3);
        assert_eq!(stats.favorites, 1);
        assert_eq!(
            stats.distribution,
            vec![(SpreadCategory::Love, 2), (SpreadCategory::Career, 1)]
        );
        assert_eq!(stats.most_popular_spread(), Some(SpreadCategory::Love));
        assert_eq!(stats.most_frequent_card.as_deref(), Some("The Fool"));
    }

    #[test]
    fn distribution_ties_follow_presentation_order() {
        let readings = vec![
            reading(SpreadCategory::Karma, &["Death"], 10),
            reading(SpreadCategory::Career, &["Death"], 10),
        ];
        let stats = ReadingStats::compute(&readings, today());
        assert_eq!(stats.most_popular_spread(), Some(SpreadCategory::Career));
    }

    #[test]
    fn card_ties_pick_first_name() {
        let readings = vec![reading(SpreadCategory::Love, &["The Sun", "Death"], 10)];
        let stats = ReadingStats::compute(&readings, today());
        assert_eq!(stats.most_frequent_card.as_deref(), Some("Death"));
    }

    #[test]
    fn activity_window() {
        let readings = vec![
            reading(SpreadCategory::Love, &["Death"], 10),
            reading(SpreadCategory::Love, &["Death"], 10),
            reading(SpreadCategory::Love, &["Death"], 4),
            reading(SpreadCategory::Love, &["Death"], 3),
        ];
        let stats = ReadingStats::compute(&readings, today());
        let days: Vec<u32> = stats
            .last_seven_days
            .iter()
            .map(|(d, _)| chrono::Datelike::day(d))
            .collect();
        assert_eq!(days, vec![4, 5, 6, 7, 8, 9, 10]);
        let counts: Vec<usize> = stats.last_seven_days.iter().map(|(_, n)| *n).collect();
        assert_eq!(counts, vec![1, 0, 0, 0, 0, 0, 2]);
    }
}
