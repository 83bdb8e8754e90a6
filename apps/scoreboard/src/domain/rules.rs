//! Scoring tables for the heist rounds.

/// Place-points by finishing rank (index 0 is the fastest team).
/// Ranks past the end of the table earn nothing.
pub const PLACE_POINTS: [i32; 4] = [100, 75, 50, 25];

/// Multiplier applied to a correct team's place-points for a given round.
///
/// Rounds 3 and 4 count double, round 5 counts triple, every other round
/// number (including out-of-range ones) counts once.
pub fn round_multiplier(round_number: i32) -> i32 {
    match round_number {
        3 | 4 => 2,
        5 => 3,
        _ => 1,
    }
}

/// Place-points for a zero-based rank.
pub fn place_points(rank: usize) -> i32 {
    PLACE_POINTS.get(rank).copied().unwrap_or(0)
}

/// Factor applied on top of the round multiplier when a team plays its blitz.
pub const BLITZ_FACTOR: i32 = 2;
