//! Rarity-weighted selection and RNG-consuming helpers.
//!
//! The caller owns the RNG and threads it through every call, so a seeded
//! generator replays the exact same sequence. `weighted_select` itself
//! takes the draw as a plain number and is fully deterministic.

use rand::Rng;

use arena_core::enums::PowerupKind;
use arena_core::error::InputValidationError;
use arena_core::params::PowerupsParams;

/// A selection candidate: a kind and its relative rarity weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weighted<K> {
    pub kind: K,
    pub rarity: f64,
}

impl<K> Weighted<K> {
    pub fn new(kind: K, rarity: f64) -> Self {
        Self { kind, rarity }
    }
}

/// Select a kind by normalized rarity.
///
/// Rarities are normalized by their sum over the supplied (eligible)
/// candidates; each candidate owns a contiguous subinterval of [0, 1) in
/// slice order, and the candidate whose interval contains `draw` wins.
/// A boundary draw lands in the following interval: with weights
/// [0.3, 0.7], draw 0.3 selects the second candidate.
///
/// Errors on an empty slice, a non-finite or non-positive rarity, or a
/// draw outside [0, 1).
pub fn weighted_select<K>(
    candidates: &[Weighted<K>],
    draw: f64,
) -> Result<&K, InputValidationError> {
    if candidates.is_empty() {
        return Err(InputValidationError::EmptyCandidates);
    }
    if !draw.is_finite() || !(0.0..1.0).contains(&draw) {
        return Err(InputValidationError::OutOfDomain {
            name: "draw",
            value: draw,
            expected: "[0, 1)",
        });
    }
    let mut total = 0.0;
    for c in candidates {
        if !(c.rarity.is_finite() && c.rarity > 0.0) {
            return Err(InputValidationError::OutOfDomain {
                name: "rarity",
                value: c.rarity,
                expected: "(0, inf)",
            });
        }
        total += c.rarity;
    }

    let mut cumulative = 0.0;
    for c in candidates {
        cumulative += c.rarity / total;
        if draw < cumulative {
            return Ok(&c.kind);
        }
    }
    // Floating-point residue can leave the last cumulative bound a hair
    // below 1.0; the final interval absorbs it.
    Ok(&candidates[candidates.len() - 1].kind)
}

/// Build the eligible powerup candidate set in table-declaration order,
/// skipping kinds the caller reports as on cooldown. Cooldown clocks are
/// owned by the caller, not this crate.
pub fn eligible_powerups<F>(params: &PowerupsParams, on_cooldown: F) -> Vec<Weighted<PowerupKind>>
where
    F: Fn(PowerupKind) -> bool,
{
    params
        .iter()
        .filter(|(kind, _)| !on_cooldown(*kind))
        .map(|(kind, p)| Weighted::new(kind, p.rarity))
        .collect()
}

/// Fisher–Yates shuffle in place.
pub fn shuffle<R: Rng, T>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Uniform pick from a slice. Errors on an empty slice.
pub fn random_element<'a, R: Rng, T>(
    rng: &mut R,
    items: &'a [T],
) -> Result<&'a T, InputValidationError> {
    if items.is_empty() {
        return Err(InputValidationError::EmptyCandidates);
    }
    Ok(&items[rng.gen_range(0..items.len())])
}

/// Uniform integer in `[min, max]` (inclusive). Requires `min <= max`.
pub fn random_int<R: Rng>(rng: &mut R, min: i64, max: i64) -> Result<i64, InputValidationError> {
    if min > max {
        return Err(InputValidationError::InvertedBounds {
            lo: min as f64,
            hi: max as f64,
        });
    }
    Ok(rng.gen_range(min..=max))
}

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Random identifier: 26 lowercase base-36 characters (two 13-character
/// halves, the shape the original id generator produced).
pub fn random_id<R: Rng>(rng: &mut R) -> String {
    (0..26)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

/// RFC 4122 version 4 UUID string.
pub fn uuid_v4<R: Rng>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    bytes[6] = (bytes[6] & 0x0f) | 0x40; // version 4
    bytes[8] = (bytes[8] & 0x3f) | 0x80; // variant 10
    format!(
        "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3],
        bytes[4], bytes[5],
        bytes[6], bytes[7],
        bytes[8], bytes[9],
        bytes[10], bytes[11], bytes[12], bytes[13], bytes[14], bytes[15],
    )
}

/// Random `#rrggbb` color literal.
pub fn random_color<R: Rng>(rng: &mut R) -> String {
    format!("#{:06x}", rng.gen_range(0..0x100_0000u32))
}
