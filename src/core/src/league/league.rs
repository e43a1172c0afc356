use crate::club::{Team, TeamStatistics};
use crate::league::{LeagueTable, NewsCollection, NewsItem, RoundResult, Schedule, ScheduleItem};
use crate::r#match::{MatchEngine, MatchResult};
use crate::utils::Logging;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

#[derive(Debug)]
pub struct League {
    pub id: u32,
    pub name: String,
    pub slug: String,

    pub schedule: Schedule,
    pub table: LeagueTable,
    pub news: NewsCollection,

    pub current_round: u8,

    // one-shot season events
    pub half_season_leader: Option<u32>,
    pub champion: Option<u32>,
}

impl League {
    pub fn new(id: u32, name: String, slug: String, schedule: Schedule) -> Self {
        League {
            id,
            name,
            slug,
            schedule,
            table: LeagueTable::default(),
            news: NewsCollection::default(),
            current_round: 1,
            half_season_leader: None,
            champion: None,
        }
    }

    pub fn total_rounds(&self) -> u8 {
        self.schedule.total_rounds()
    }

    pub fn half_season_round(&self) -> u8 {
        self.total_rounds() / 2
    }

    pub fn is_season_finished(&self) -> bool {
        self.champion.is_some()
    }

    /// Plays every fixture of the current round, refreshes the standings
    /// and advances the round pointer. Re-entering an already played round
    /// (including the terminal one) is a no-op: nothing is re-simulated and
    /// no season event fires twice.
    pub fn simulate_round(&mut self, teams: &mut [Team], rng: &mut StdRng) -> RoundResult {
        let round = self.current_round;

        let fixtures: Vec<ScheduleItem> = self
            .schedule
            .items_for_round(round)
            .iter()
            .filter(|item| !item.is_played())
            .cloned()
            .collect();

        if fixtures.is_empty() {
            debug!(
                "league {}: round {} already played, nothing to simulate",
                self.slug, round
            );
            return RoundResult::empty(self.id, round);
        }

        info!(
            "⚽ simulating round {} of {} ({} fixtures)",
            round,
            self.total_rounds(),
            fixtures.len()
        );

        // Per-fixture seeds drawn from the master source up front keep the
        // parallel playback reproducible for a given seed.
        let seeded: Vec<(ScheduleItem, u64)> = fixtures
            .into_iter()
            .map(|item| {
                let seed = rng.random();
                (item, seed)
            })
            .collect();

        let match_results: Vec<MatchResult> = seeded
            .into_par_iter()
            .map(|(item, seed)| {
                let home = Self::team(teams, item.home_team_id);
                let away = Self::team(teams, item.away_team_id);

                let mut match_rng = StdRng::seed_from_u64(seed);

                let message = format!("play match: {} vs {}", home.name, away.name);

                Logging::estimate_result(
                    || MatchEngine::play(&item, home, away, &mut match_rng),
                    &message,
                )
            })
            .collect();

        // Apply sequentially: scores into the schedule, fresh roster
        // snapshots onto the teams.
        for result in &match_results {
            self.schedule.update_match_result(&result.id, &result.score);

            Self::team_mut(teams, result.score.home_team.team_id).players =
                result.home_squad.clone();
            Self::team_mut(teams, result.score.away_team.team_id).players =
                result.away_squad.clone();
        }

        self.refresh_table(teams);

        let mut round_result = RoundResult::with_match_results(self.id, round, match_results);

        self.process_round_events(teams, &mut round_result);

        round_result
    }

    /// Rebuilds the table from the fixture set and mirrors each recomputed
    /// summary onto its team, so the two views cannot diverge.
    pub fn refresh_table(&mut self, teams: &mut [Team]) {
        let team_ids: Vec<u32> = teams.iter().map(|team| team.id).collect();

        self.table = LeagueTable::from_schedule(&team_ids, &self.schedule);

        for team in teams.iter_mut() {
            if let Some(row) = self.table.row(team.id) {
                team.statistics = TeamStatistics::from(row);
            }
        }
    }

    fn process_round_events(&mut self, teams: &[Team], result: &mut RoundResult) {
        let round = self.current_round;

        if round == self.half_season_round() && self.half_season_leader.is_none() {
            if let Some(leader_row) = self.table.leader() {
                let leader_name = Self::team(teams, leader_row.team_id).name.clone();

                self.half_season_leader = Some(leader_row.team_id);
                result.half_season_leader = Some(leader_row.team_id);

                info!("🏆 halfway point reached, {} lead the league", leader_name);

                self.news.add(NewsItem::league_update(
                    format!("half-champ-{}", round),
                    round,
                    String::from("Halfway Point Reached!"),
                    format!(
                        "{} lead the pack as 'Winter Champions' at the halfway stage of the season. Can they hold on?",
                        leader_name
                    ),
                ));
            }
        }

        if round == self.total_rounds() {
            // terminal state: the round pointer stays put
            if self.champion.is_none() {
                if let Some(winner_row) = self.table.leader() {
                    let winner_name = Self::team(teams, winner_row.team_id).name.clone();

                    self.champion = Some(winner_row.team_id);
                    result.champion = Some(winner_row.team_id);

                    info!("🥇 champions: {}", winner_name);

                    self.news.add(NewsItem::league_update(
                        format!("champ-{}", round),
                        round,
                        format!("CHAMPIONS: {}!", winner_name.to_uppercase()),
                        format!(
                            "{} have been crowned champions of the {} after a thrilling season!",
                            winner_name, self.name
                        ),
                    ));
                }
            }
        } else {
            self.current_round += 1;
        }
    }

    fn team<'t>(teams: &'t [Team], team_id: u32) -> &'t Team {
        teams
            .iter()
            .find(|team| team.id == team_id)
            .unwrap_or_else(|| panic!("team {} not found", team_id))
    }

    fn team_mut<'t>(teams: &'t mut [Team], team_id: u32) -> &'t mut Team {
        teams
            .iter_mut()
            .find(|team| team.id == team_id)
            .unwrap_or_else(|| panic!("team {} not found", team_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{Player, PlayerCollection, PlayerPositionType, TeamRatings};
    use crate::shared::FullName;

    fn roster(team_id: u32) -> PlayerCollection {
        use PlayerPositionType::*;

        let template = [
            Goalkeeper, Defender, Defender, Defender, Defender, Midfielder, Midfielder, Midfielder,
            Midfielder, Forward, Forward, Goalkeeper, Defender, Midfielder, Forward,
        ];

        PlayerCollection::new(
            template
                .iter()
                .enumerate()
                .map(|(idx, &position)| {
                    Player::new(
                        team_id * 100 + idx as u32,
                        FullName::new(format!("First{}", idx), format!("Last{}", idx)),
                        position,
                    )
                })
                .collect(),
        )
    }

    fn league_with_teams(count: u32) -> (League, Vec<Team>) {
        let teams: Vec<Team> = (1..=count)
            .map(|id| {
                Team::new(
                    id,
                    format!("Team {}", id),
                    format!("team-{}", id),
                    String::from("#ffffff"),
                    TeamRatings {
                        attack: 60 + (id * 4) as u8,
                        midfield: 70,
                        defense: 65,
                    },
                    roster(id),
                )
            })
            .collect();

        let team_ids: Vec<u32> = teams.iter().map(|team| team.id).collect();
        let schedule = Schedule::generate(&team_ids);

        let mut league = League::new(
            1,
            String::from("Test League"),
            String::from("test-league"),
            schedule,
        );

        let mut teams = teams;
        league.refresh_table(&mut teams);

        (league, teams)
    }

    #[test]
    fn one_round_plays_exactly_the_current_fixtures() {
        let (mut league, mut teams) = league_with_teams(8);
        let mut rng = StdRng::seed_from_u64(1);

        let result = league.simulate_round(&mut teams, &mut rng);

        assert_eq!(result.round, 1);
        assert_eq!(result.match_results.len(), 4);
        assert_eq!(league.current_round, 2);

        assert!(league.schedule.items_for_round(1).iter().all(|i| i.is_played()));
        assert!(league.schedule.items_for_round(2).iter().all(|i| !i.is_played()));

        // the table mirrors one played round
        for row in league.table.get() {
            assert_eq!(row.played, 1);
        }
        for team in &teams {
            assert_eq!(team.statistics.played, 1);
        }
    }

    #[test]
    fn full_season_fires_each_event_exactly_once() {
        let (mut league, mut teams) = league_with_teams(8);
        let mut rng = StdRng::seed_from_u64(7);

        let total_rounds = league.total_rounds();
        let mut halfway_events = 0;
        let mut champion_events = 0;

        for _ in 0..total_rounds {
            let result = league.simulate_round(&mut teams, &mut rng);

            if result.half_season_leader.is_some() {
                halfway_events += 1;
                assert_eq!(result.round, total_rounds / 2);
            }
            if result.champion.is_some() {
                champion_events += 1;
                assert_eq!(result.round, total_rounds);
            }
        }

        assert_eq!(halfway_events, 1);
        assert_eq!(champion_events, 1);
        assert!(league.is_season_finished());
        assert_eq!(league.current_round, total_rounds);

        assert!(league.schedule.items().all(|item| item.is_played()));

        // every roster member appeared in every round
        for team in &teams {
            for player in team.players.players() {
                assert_eq!(player.statistics.played, total_rounds as u16);
            }
        }

        // news feed carries the halfway and champion items
        assert!(league.news.contains(&format!("half-champ-{}", total_rounds / 2)));
        assert!(league.news.contains(&format!("champ-{}", total_rounds)));
    }

    #[test]
    fn finished_season_is_a_no_op() {
        let (mut league, mut teams) = league_with_teams(4);
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..league.total_rounds() {
            league.simulate_round(&mut teams, &mut rng);
        }

        let champion = league.champion;
        let news_count = league.news.len();
        let terminal_round = league.current_round;

        let result = league.simulate_round(&mut teams, &mut rng);

        assert!(!result.has_match_results());
        assert_eq!(result.champion, None);
        assert_eq!(league.current_round, terminal_round);
        assert_eq!(league.champion, champion);
        assert_eq!(league.news.len(), news_count);
    }

    #[test]
    fn goals_in_table_match_goals_on_players() {
        let (mut league, mut teams) = league_with_teams(6);
        let mut rng = StdRng::seed_from_u64(21);

        for _ in 0..3 {
            league.simulate_round(&mut teams, &mut rng);
        }

        let table_goals: i32 = league.table.get().iter().map(|row| row.goal_scored).sum();
        let player_goals: i32 = teams
            .iter()
            .flat_map(|team| team.players.players())
            .map(|player| player.statistics.goals as i32)
            .sum();

        assert_eq!(table_goals, player_goals);
    }

    #[test]
    fn identical_seeds_replay_the_same_season() {
        let (mut first_league, mut first_teams) = league_with_teams(6);
        let (mut second_league, mut second_teams) = league_with_teams(6);

        let mut first_rng = StdRng::seed_from_u64(42);
        let mut second_rng = StdRng::seed_from_u64(42);

        for _ in 0..first_league.total_rounds() {
            first_league.simulate_round(&mut first_teams, &mut first_rng);
            second_league.simulate_round(&mut second_teams, &mut second_rng);
        }

        for (a, b) in first_league.table.get().iter().zip(second_league.table.get()) {
            assert_eq!(a.team_id, b.team_id);
            assert_eq!(a.points, b.points);
            assert_eq!(a.goal_scored, b.goal_scored);
        }

        assert_eq!(first_league.champion, second_league.champion);
    }
}
