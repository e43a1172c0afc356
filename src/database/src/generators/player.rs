use crate::loaders::PeopleNames;
use core::utils::IntegerUtils;
use core::{FullName, Player, PlayerCollection, PlayerPositionType};
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU32, Ordering};

static PLAYER_ID_SEQUENCE: LazyLock<AtomicU32> = LazyLock::new(|| AtomicU32::new(1));

/// Starting eleven in a 4-4-2 plus one substitute per position line.
const SQUAD_TEMPLATE: [PlayerPositionType; 15] = [
    PlayerPositionType::Goalkeeper,
    PlayerPositionType::Defender,
    PlayerPositionType::Defender,
    PlayerPositionType::Defender,
    PlayerPositionType::Defender,
    PlayerPositionType::Midfielder,
    PlayerPositionType::Midfielder,
    PlayerPositionType::Midfielder,
    PlayerPositionType::Midfielder,
    PlayerPositionType::Forward,
    PlayerPositionType::Forward,
    PlayerPositionType::Goalkeeper,
    PlayerPositionType::Defender,
    PlayerPositionType::Midfielder,
    PlayerPositionType::Forward,
];

pub struct PlayerGenerator {
    people_names_data: PeopleNames,
}

impl PlayerGenerator {
    pub fn with_people_names(people_names: &PeopleNames) -> Self {
        PlayerGenerator {
            people_names_data: people_names.clone(),
        }
    }

    pub fn generate_squad(&mut self) -> PlayerCollection {
        PlayerCollection::new(
            SQUAD_TEMPLATE
                .iter()
                .map(|&position| self.generate(position))
                .collect(),
        )
    }

    pub fn generate(&mut self, position: PlayerPositionType) -> Player {
        Player::new(
            PLAYER_ID_SEQUENCE.fetch_add(1, Ordering::SeqCst),
            FullName::new(self.generate_first_name(), self.generate_last_name()),
            position,
        )
    }

    fn generate_first_name(&self) -> String {
        let names = &self.people_names_data.first_names;
        names[IntegerUtils::random(0, names.len() as i32 - 1) as usize].clone()
    }

    fn generate_last_name(&self) -> String {
        let names = &self.people_names_data.last_names;
        names[IntegerUtils::random(0, names.len() as i32 - 1) as usize].clone()
    }
}
