use crate::club::{PlayerCollection, PlayerPositionType, Team};
use crate::league::ScheduleItem;
use crate::r#match::{GoalDetail, MatchResult, Score, TeamScore};
use rand::RngExt;
use rand::rngs::StdRng;

/// Fixed bonus applied to the home side's power.
pub const HOME_ADVANTAGE: f64 = 5.0;

/// Power gap beyond which one side dominates the match.
const STRONG_WIN_THRESHOLD: f64 = 15.0;

pub struct MatchEngine;

impl MatchEngine {
    /// Plays a single fixture. The random source is injected so results
    /// are reproducible for a given seed.
    pub fn play(item: &ScheduleItem, home: &Team, away: &Team, rng: &mut StdRng) -> MatchResult {
        let (home_goals, away_goals) = Self::simulate_score(home, away, rng);

        let (home_squad, home_details) = GoalAttribution::attribute(&home.players, home_goals, rng);
        let (away_squad, away_details) = GoalAttribution::attribute(&away.players, away_goals, rng);

        let mut details = home_details;
        details.extend(away_details);

        MatchResult {
            id: item.id.clone(),
            round: item.round,
            score: Score::new(
                TeamScore::new(home.id, home_goals),
                TeamScore::new(away.id, away_goals),
                details,
            ),
            home_squad,
            away_squad,
        }
    }

    /// Deliberately biased scoring model: power difference decides between
    /// a one-sided result and a close one, goals stay small and non-negative.
    fn simulate_score(home: &Team, away: &Team, rng: &mut StdRng) -> (u8, u8) {
        let home_power = home.ratings.power() + HOME_ADVANTAGE + rng.random::<f64>() * 20.0;
        let away_power = away.ratings.power() + rng.random::<f64>() * 20.0;

        let diff = home_power - away_power;

        let base_goals: u8 = rng.random_range(0..=2);

        if diff > STRONG_WIN_THRESHOLD {
            let home_goals = base_goals + rng.random_range(1..=4);
            let away_goals = rng.random_range(0..=1);
            (home_goals, away_goals)
        } else if diff < -STRONG_WIN_THRESHOLD {
            let away_goals = base_goals + rng.random_range(1..=4);
            let home_goals = rng.random_range(0..=1);
            (home_goals, away_goals)
        } else {
            let home_goals = base_goals + rng.random_range(0..=1);
            let away_goals = base_goals + rng.random_range(0..=1);
            (home_goals, away_goals)
        }
    }
}

pub struct GoalAttribution;

impl GoalAttribution {
    /// Attributes a side's goals to its roster and returns a new roster
    /// snapshot together with the goal details. The input roster is left
    /// untouched; every member's appearance counter is incremented once.
    pub fn attribute(
        players: &PlayerCollection,
        goals: u8,
        rng: &mut StdRng,
    ) -> (PlayerCollection, Vec<GoalDetail>) {
        let mut squad = players.clone();
        let mut details = Vec::with_capacity(goals as usize);

        for player in &mut squad.players {
            player.statistics.played += 1;
        }

        for _ in 0..goals {
            let scorer_idx = Self::pick_scorer(&squad, rng);
            squad.players[scorer_idx].statistics.goals += 1;

            let assist_player_id = Self::pick_assister(&mut squad, scorer_idx, rng);

            details.push(GoalDetail {
                player_id: squad.players[scorer_idx].id,
                assist_player_id,
            });
        }

        (squad, details)
    }

    /// Position-weighted scorer selection: forwards score most goals,
    /// goalkeepers almost never. Falls back to the whole roster when no
    /// member plays the drawn position.
    fn pick_scorer(squad: &PlayerCollection, rng: &mut StdRng) -> usize {
        let roll: f64 = rng.random();

        let position = if roll > 0.95 {
            PlayerPositionType::Goalkeeper
        } else if roll > 0.85 {
            PlayerPositionType::Defender
        } else if roll > 0.55 {
            PlayerPositionType::Midfielder
        } else {
            PlayerPositionType::Forward
        };

        let candidates: Vec<usize> = squad
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.position == position)
            .map(|(idx, _)| idx)
            .collect();

        if candidates.is_empty() {
            rng.random_range(0..squad.players.len())
        } else {
            candidates[rng.random_range(0..candidates.len())]
        }
    }

    /// 70% of goals come with an assist, credited to any member except the
    /// scorer. Skipped when the scorer is the only roster member.
    fn pick_assister(
        squad: &mut PlayerCollection,
        scorer_idx: usize,
        rng: &mut StdRng,
    ) -> Option<u32> {
        if rng.random::<f64>() <= 0.3 {
            return None;
        }

        let candidates: Vec<usize> = (0..squad.players.len())
            .filter(|&idx| idx != scorer_idx)
            .collect();

        if candidates.is_empty() {
            return None;
        }

        let assister_idx = candidates[rng.random_range(0..candidates.len())];
        squad.players[assister_idx].statistics.assists += 1;

        Some(squad.players[assister_idx].id)
    }
}
