use crate::generators::PlayerGenerator;
use crate::loaders::{DatabaseEntity, TeamTemplate};
use core::{League, Schedule, SimulatorData, Team, TeamRatings};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

const LEAGUE_NAME: &str = "Nova Football League";
const LEAGUE_SLUG: &str = "nova-league";

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    /// Builds the initial league state from the seed database: teams with
    /// generated rosters, the full season schedule and the master random
    /// source (fixed when a seed is given, OS entropy otherwise).
    pub fn generate(data: &DatabaseEntity, seed: Option<u64>) -> SimulatorData {
        let mut player_generator = PlayerGenerator::with_people_names(&data.names);

        let mut teams: Vec<Team> = data
            .teams
            .iter()
            .enumerate()
            .map(|(idx, template)| {
                Self::generate_team(idx as u32 + 1, template, &mut player_generator)
            })
            .collect();

        let team_ids: Vec<u32> = teams.iter().map(|team| team.id).collect();

        let mut league = League::new(
            1,
            String::from(LEAGUE_NAME),
            String::from(LEAGUE_SLUG),
            Schedule::generate(&team_ids),
        );

        league.refresh_table(&mut teams);

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        info!(
            "generated league '{}': {} teams, {} rounds",
            league.name,
            teams.len(),
            league.total_rounds()
        );

        SimulatorData::new(league, teams, rng)
    }

    fn generate_team(
        id: u32,
        template: &TeamTemplate,
        player_generator: &mut PlayerGenerator,
    ) -> Team {
        Team::new(
            id,
            template.name.clone(),
            template.slug.clone(),
            template.color.clone(),
            TeamRatings {
                attack: template.attack,
                midfield: template.midfield,
                defense: template.defense,
            },
            player_generator.generate_squad(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::DatabaseLoader;
    use core::LeagueSimulator;

    #[test]
    fn generated_state_covers_the_whole_season() {
        let database = DatabaseLoader::load();
        let data = DatabaseGenerator::generate(&database, Some(1));

        assert_eq!(data.teams.len(), 8);
        assert_eq!(data.league.total_rounds(), 14);
        assert_eq!(data.league.schedule.items().count(), 56);
        assert_eq!(data.league.current_round, 1);

        // the freshly derived table lists every team with a zeroed summary
        assert_eq!(data.league.table.get().len(), 8);
        for row in data.league.table.get() {
            assert_eq!(row.played, 0);
            assert_eq!(row.points, 0);
        }
    }

    #[test]
    fn seeded_state_simulates_a_round_end_to_end() {
        let database = DatabaseLoader::load();
        let mut data = DatabaseGenerator::generate(&database, Some(5));

        let result = LeagueSimulator::simulate_round(&mut data);

        assert_eq!(result.round, 1);
        assert_eq!(result.match_results.len(), 4);
        assert_eq!(data.league.current_round, 2);
    }
}
