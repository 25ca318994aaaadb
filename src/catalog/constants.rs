//! Fixed game constants: starting values, the income track, turn limits.

/// Money each player starts with.
pub const STARTING_MONEY: i64 = 17;

/// Income-track index each player starts at.
pub const STARTING_INCOME_LEVEL: u8 = 10;

/// Cards dealt at setup and at the era handover; also the hand cap.
pub const STARTING_HAND_SIZE: usize = 8;

/// Maximum cards in hand.
pub const MAX_HAND_SIZE: usize = 8;

/// Actions each player gets per turn.
pub const ACTIONS_PER_TURN: u8 = 2;

/// Money credited when taking the loan.
pub const LOAN_AMOUNT: i64 = 30;

/// Income-track penalty for holding the loan, and the per-income-phase
/// interest charge.
pub const LOAN_INTEREST: i64 = 3;

/// Money converted to victory points at this ratio at game end.
pub const MONEY_TO_VP: i64 = 4;

/// Canal era ends after this many turns.
pub const CANAL_TURN_LIMIT: u32 = 8;

/// Rail era (and the game) ends after this many turns.
pub const RAIL_TURN_LIMIT: u32 = 6;

/// Per-unit price for a local sale to a co-located consumer.
pub const LOCAL_SALE_UNIT_PRICE: i64 = 2;

/// Per-unit price for a distant sale through the network.
pub const DISTANT_SALE_UNIT_PRICE: i64 = 1;

/// Income paid per income-track level. Negative entries charge the player.
pub const INCOME_TRACK: [i64; 40] = [
    -10, -7, -4, -2, -1, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 12, 14, 16, 18, 20, 22, 25, 28, 31,
    34, 37, 40, 44, 48, 52, 56, 60, 65, 70, 75, 80, 86, 92, 98,
];

/// Income for a track level, clamping past the end of the track.
#[must_use]
pub fn income_for_level(level: u8) -> i64 {
    let idx = (level as usize).min(INCOME_TRACK.len() - 1);
    INCOME_TRACK[idx]
}
