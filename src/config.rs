use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 4;

/// Fleet in placement order, longest first. Exactly one ship per length.
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Submarine", 3),
    ShipType::new("Patrol Boat", 2),
];

/// Total number of ship segments in the fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 2;

/// Random draws the opponent gets per turn before it gives up and skips.
pub const MAX_TARGETING_ATTEMPTS: usize = 100;

/// Upper bound on rejection-sampling draws for a single random ship placement.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Automated games that have not finished after this many rounds are abandoned.
pub const MAX_AUTOPLAY_ROUNDS: usize = 1_000;

/// Longest accepted player name.
pub const MAX_NAME_LENGTH: usize = 32;

/// Look up the fleet entry with the given length.
pub fn ship_for_length(length: usize) -> Option<ShipType> {
    SHIPS.iter().copied().find(|s| s.length() == length)
}
