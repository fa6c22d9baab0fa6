//! Combat tuning constants - all tunable values in one place

/// Fraction of incoming damage removed by a matching protection prayer
/// when the attacker is a player
pub const PROTECTION_DAMAGE_REDUCTION: f64 = 0.20;

/// Chance a matching protection prayer additionally cancels a hit outright
/// (fresh draw per hit, player attackers only)
pub const PROTECTION_CANCEL_CHANCE: f64 = 0.20;

/// One-in-N chance the Warded Bulwark set zeroes the defence roll,
/// rolled once per melee attack
pub const GUARD_BREAK_DIE: u32 = 8;

/// Fraction of the victim's vitality deficit the Gravethirst set adds
/// to melee max hits
pub const GRAVETHIRST_DEFICIT_FACTOR: f64 = 0.35;

/// Below this offensive/defensive equipment bonus the roll collapses to zero
/// seven times out of eight
pub const COLLAPSE_BONUS_THRESHOLD: f64 = -67.0;

/// One-in-N chance a collapsed roll survives
pub const COLLAPSE_DIE: u32 = 8;

/// Damage-stat multiplier granted while strength or attack is still at or
/// below [`LOW_LEVEL_THRESHOLD`]
pub const LOW_LEVEL_DAMAGE_MULTIPLIER: f64 = 1.8;
pub const LOW_LEVEL_THRESHOLD: i32 = 10;

/// Hit probability is clamped to this closed interval
pub const ACCURACY_FLOOR: f64 = 0.01;
pub const ACCURACY_CEILING: f64 = 0.99;

/// Experience granted per point of damage dealt
pub const EXPERIENCE_PER_DAMAGE: f64 = 4.0;

/// Vitality receives a third of the per-skill experience share
pub const VITALITY_EXPERIENCE_DIVISOR: f64 = 3.0;

/// Ledger entries untouched for this many ticks stop counting toward credit
pub const LEDGER_TIMEOUT_TICKS: u64 = 100;
