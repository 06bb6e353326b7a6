/// Number of faces on every die. Faces are numbered `1..=FACE_COUNT`.
pub const FACE_COUNT: usize = 6;

/// Dice generated per outcome when nothing else is configured.
pub const DEFAULT_DICE_POOL: usize = 7;

/// Largest pool the enumerator will materialise (6^8 outcomes).
pub const MAX_DICE_POOL: usize = 8;

/// Reroll distances above this never earn credit.
pub const MAX_REROLL_DISTANCE: usize = 3;

/// Dice of one parity needed for a Flush.
pub const FLUSH_SIZE: usize = 5;
