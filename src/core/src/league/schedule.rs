use crate::r#match::{GoalDetail, Score};
use serde::Serialize;

#[derive(Debug, Default, Clone, Serialize)]
pub struct Schedule {
    pub tours: Vec<ScheduleTour>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleTour {
    pub num: u8,
    pub items: Vec<ScheduleItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleItem {
    pub id: String,
    pub round: u8,

    pub home_team_id: u32,
    pub away_team_id: u32,

    pub result: Option<ScheduleItemResult>,

    /// Narrative text, filled at most once after the fixture is played.
    pub commentary: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleItemResult {
    pub home_goals: u8,
    pub away_goals: u8,
    pub details: Vec<GoalDetail>,
}

impl ScheduleItem {
    fn new(round: u8, home_team_id: u32, away_team_id: u32) -> Self {
        ScheduleItem {
            id: format!("m-{}-{}-{}", round, home_team_id, away_team_id),
            round,
            home_team_id,
            away_team_id,
            result: None,
            commentary: None,
        }
    }

    #[inline]
    pub fn is_played(&self) -> bool {
        self.result.is_some()
    }

    pub fn involves(&self, team_id: u32) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }
}

impl ScheduleItemResult {
    pub fn from_score(score: &Score) -> Self {
        ScheduleItemResult {
            home_goals: score.home_team.get(),
            away_goals: score.away_team.get(),
            details: score.detail().to_vec(),
        }
    }
}

impl Schedule {
    /// Builds the full double round-robin season with the circle method:
    /// the first team stays fixed while the rest rotate, each pairing is
    /// mirrored into the second half of the season. Deterministic in the
    /// team order, no random source involved.
    pub fn generate(team_ids: &[u32]) -> Schedule {
        let team_count = team_ids.len();

        assert!(
            team_count >= 2 && team_count % 2 == 0,
            "schedule generation requires an even number of teams, got {}",
            team_count
        );

        let rounds_per_half = team_count - 1;
        let total_rounds = rounds_per_half * 2;

        let mut tours: Vec<ScheduleTour> = (1..=total_rounds)
            .map(|num| ScheduleTour {
                num: num as u8,
                items: Vec::with_capacity(team_count / 2),
            })
            .collect();

        let mut ring: Vec<u32> = team_ids.to_vec();

        for round in 0..rounds_per_half {
            for pair in 0..team_count / 2 {
                let home = ring[pair];
                let away = ring[team_count - 1 - pair];

                // First leg, then the reverse fixture in the second half
                tours[round]
                    .items
                    .push(ScheduleItem::new((round + 1) as u8, home, away));

                tours[round + rounds_per_half].items.push(ScheduleItem::new(
                    (round + 1 + rounds_per_half) as u8,
                    away,
                    home,
                ));
            }

            // Rotate the ring, keeping the first team in place
            let last = ring.pop().expect("ring cannot be empty");
            ring.insert(1, last);
        }

        Schedule { tours }
    }

    pub fn total_rounds(&self) -> u8 {
        self.tours.len() as u8
    }

    pub fn tour(&self, round: u8) -> Option<&ScheduleTour> {
        self.tours.iter().find(|tour| tour.num == round)
    }

    pub fn items_for_round(&self, round: u8) -> &[ScheduleItem] {
        self.tour(round)
            .map(|tour| tour.items.as_slice())
            .unwrap_or(&[])
    }

    pub fn items(&self) -> impl Iterator<Item = &ScheduleItem> {
        self.tours.iter().flat_map(|tour| &tour.items)
    }

    pub fn played_items_for_team(&self, team_id: u32) -> impl Iterator<Item = &ScheduleItem> {
        self.items()
            .filter(move |item| item.is_played() && item.involves(team_id))
    }

    pub fn item(&self, match_id: &str) -> Option<&ScheduleItem> {
        self.items().find(|item| item.id == match_id)
    }

    fn item_mut(&mut self, match_id: &str) -> Option<&mut ScheduleItem> {
        self.tours
            .iter_mut()
            .flat_map(|tour| &mut tour.items)
            .find(|item| item.id == match_id)
    }

    /// Records a played fixture. The transition is one-way: a result is
    /// written once and never overwritten.
    pub fn update_match_result(&mut self, match_id: &str, score: &Score) {
        if let Some(item) = self.item_mut(match_id) {
            if item.result.is_none() {
                item.result = Some(ScheduleItemResult::from_score(score));
            }
        }
    }

    /// Stores narrative text for a fixture, first writer wins.
    pub fn fill_commentary(&mut self, match_id: &str, commentary: String) {
        if let Some(item) = self.item_mut(match_id) {
            if item.commentary.is_none() {
                item.commentary = Some(commentary);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r#match::TeamScore;
    use std::collections::HashSet;

    fn team_ids(count: u32) -> Vec<u32> {
        (1..=count).collect()
    }

    #[test]
    fn eight_teams_make_fourteen_rounds_of_four() {
        let schedule = Schedule::generate(&team_ids(8));

        assert_eq!(schedule.total_rounds(), 14);
        assert_eq!(schedule.items().count(), 56);

        for tour in &schedule.tours {
            assert_eq!(tour.items.len(), 4);
        }
    }

    #[test]
    fn every_ordered_pair_meets_exactly_once() {
        let ids = team_ids(8);
        let schedule = Schedule::generate(&ids);

        let mut seen = HashSet::new();

        for item in schedule.items() {
            assert_ne!(item.home_team_id, item.away_team_id);
            assert!(
                seen.insert((item.home_team_id, item.away_team_id)),
                "pair ({}, {}) scheduled twice",
                item.home_team_id,
                item.away_team_id
            );
        }

        assert_eq!(seen.len(), ids.len() * (ids.len() - 1));
    }

    #[test]
    fn rounds_are_contiguous_and_complete() {
        let ids = team_ids(6);
        let schedule = Schedule::generate(&ids);

        for (expected_num, tour) in (1u8..).zip(&schedule.tours) {
            assert_eq!(tour.num, expected_num);

            let mut teams_in_round = HashSet::new();
            for item in &tour.items {
                assert_eq!(item.round, tour.num);
                teams_in_round.insert(item.home_team_id);
                teams_in_round.insert(item.away_team_id);
            }

            // every team plays exactly once per round
            assert_eq!(teams_in_round.len(), ids.len());
        }
    }

    #[test]
    fn generation_is_stable_for_the_same_input() {
        let ids = team_ids(8);

        let first: Vec<String> = Schedule::generate(&ids)
            .items()
            .map(|item| item.id.clone())
            .collect();
        let second: Vec<String> = Schedule::generate(&ids)
            .items()
            .map(|item| item.id.clone())
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn fixture_ids_derive_from_round_and_teams() {
        let schedule = Schedule::generate(&team_ids(4));
        let item = &schedule.items_for_round(1)[0];

        assert_eq!(
            item.id,
            format!("m-1-{}-{}", item.home_team_id, item.away_team_id)
        );
    }

    #[test]
    #[should_panic(expected = "even number of teams")]
    fn odd_team_count_is_rejected() {
        Schedule::generate(&team_ids(7));
    }

    #[test]
    fn match_result_transition_is_one_way() {
        let mut schedule = Schedule::generate(&team_ids(2));
        let match_id = schedule.items_for_round(1)[0].id.clone();

        let first = Score::new(TeamScore::new(1, 3), TeamScore::new(2, 1), Vec::new());
        let second = Score::new(TeamScore::new(1, 0), TeamScore::new(2, 0), Vec::new());

        schedule.update_match_result(&match_id, &first);
        schedule.update_match_result(&match_id, &second);

        let result = schedule.item(&match_id).unwrap().result.as_ref().unwrap();
        assert_eq!(result.home_goals, 3);
        assert_eq!(result.away_goals, 1);
    }

    #[test]
    fn commentary_is_written_at_most_once() {
        let mut schedule = Schedule::generate(&team_ids(2));
        let match_id = schedule.items_for_round(1)[0].id.clone();

        schedule.fill_commentary(&match_id, String::from("a thriller"));
        schedule.fill_commentary(&match_id, String::from("overwritten"));

        assert_eq!(
            schedule.item(&match_id).unwrap().commentary.as_deref(),
            Some("a thriller")
        );
    }
}
