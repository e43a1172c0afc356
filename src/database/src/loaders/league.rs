use include_dir::{Dir, include_dir};
use serde::Deserialize;

static DATA_DIR: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/data");

#[derive(Debug, Clone, Deserialize)]
pub struct TeamTemplate {
    pub name: String,
    pub slug: String,
    pub color: String,
    pub attack: u8,
    pub midfield: u8,
    pub defense: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PeopleNames {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
}

#[derive(Debug)]
pub struct DatabaseEntity {
    pub teams: Vec<TeamTemplate>,
    pub names: PeopleNames,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    /// Loads the embedded seed data. The data ships inside the binary, so
    /// a missing or malformed file is a build defect, not a runtime error.
    pub fn load() -> DatabaseEntity {
        DatabaseEntity {
            teams: Self::read_json("teams.json"),
            names: Self::read_json("names.json"),
        }
    }

    fn read_json<T: for<'de> Deserialize<'de>>(file_name: &str) -> T {
        let file = DATA_DIR
            .get_file(file_name)
            .unwrap_or_else(|| panic!("missing embedded data file: {}", file_name));

        serde_json::from_slice(file.contents())
            .unwrap_or_else(|err| panic!("malformed embedded data file {}: {}", file_name, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_data_loads_eight_rated_teams() {
        let database = DatabaseLoader::load();

        assert_eq!(database.teams.len(), 8);

        for team in &database.teams {
            assert!(!team.name.is_empty());
            assert!(!team.slug.is_empty());
            assert!((1..=100).contains(&team.attack));
            assert!((1..=100).contains(&team.midfield));
            assert!((1..=100).contains(&team.defense));
        }
    }

    #[test]
    fn name_pools_are_not_empty() {
        let database = DatabaseLoader::load();

        assert!(!database.names.first_names.is_empty());
        assert!(!database.names.last_names.is_empty());
    }
}
