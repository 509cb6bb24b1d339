//! Tests for difficulty scaling, the pulse envelope, and weighted selection.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use arena_core::enums::PowerupKind;
use arena_core::error::InputValidationError;
use arena_core::params::ParameterSet;

use crate::difficulty::{difficulty_multiplier, enemy_count, time_difficulty, WaveState};
use crate::pulse::{amplitude_for, pulse_amplitude, pulse_envelope};
use crate::select::{
    eligible_powerups, random_color, random_element, random_id, random_int, shuffle, uuid_v4,
    weighted_select, Weighted,
};

// ---- Difficulty scaling ----

#[test]
fn test_difficulty_wave_zero_is_one() {
    assert_eq!(difficulty_multiplier(0, 1.1).unwrap(), 1.0);
    assert_eq!(difficulty_multiplier(0, 0.5).unwrap(), 1.0);
}

#[test]
fn test_difficulty_compounds() {
    let m = difficulty_multiplier(3, 1.1).unwrap();
    assert!((m - 1.331).abs() < 1e-9, "1.1^3 should be 1.331, got {m}");
}

#[test]
fn test_difficulty_monotone_for_scaling_above_one() {
    let mut prev = 0.0;
    for wave in 0..50 {
        let m = difficulty_multiplier(wave, 1.1).unwrap();
        assert!(m >= prev, "multiplier regressed at wave {wave}");
        prev = m;
    }
}

#[test]
fn test_difficulty_rejects_bad_scaling() {
    assert!(matches!(
        difficulty_multiplier(1, 0.0),
        Err(InputValidationError::OutOfDomain { name: "scaling_factor", .. })
    ));
    assert!(matches!(
        difficulty_multiplier(1, -1.0),
        Err(InputValidationError::OutOfDomain { .. })
    ));
    assert!(matches!(
        difficulty_multiplier(1, f64::NAN),
        Err(InputValidationError::NotFinite { .. })
    ));
}

#[test]
fn test_enemy_count_scales_and_rounds() {
    let params = ParameterSet::load().unwrap();
    let waves = &params.spawn.waves;

    // Base 3, scaling 1.1: wave 0 -> 3, wave 3 -> round(3.993) = 4.
    assert_eq!(enemy_count(0, waves).unwrap(), 3);
    assert_eq!(enemy_count(3, waves).unwrap(), 4);
    // Wave 10: 3 * 1.1^10 = 7.78 -> 8.
    assert_eq!(enemy_count(10, waves).unwrap(), 8);
}

#[test]
fn test_wave_state_matches_free_functions() {
    let params = ParameterSet::load().unwrap();
    let waves = &params.spawn.waves;
    let state = WaveState::new(5, 150_000.0);

    assert_eq!(
        state.difficulty_multiplier(waves).unwrap(),
        difficulty_multiplier(5, waves.difficulty_scaling).unwrap()
    );
    assert_eq!(state.enemy_count(waves).unwrap(), enemy_count(5, waves).unwrap());
}

#[test]
fn test_time_difficulty() {
    // At t=0 the multiplier is exactly 1.
    assert_eq!(time_difficulty(0.0, 1.02).unwrap(), 1.0);
    // One minute of play compounds once.
    let m = time_difficulty(60_000.0, 1.02).unwrap();
    assert!((m - 1.02).abs() < 1e-12);
    // Negative elapsed time is an input error, not a clamp.
    assert!(matches!(
        time_difficulty(-1.0, 1.02),
        Err(InputValidationError::OutOfDomain { name: "elapsed_ms", .. })
    ));
}

// ---- Pulse ----

#[test]
fn test_pulse_envelope_non_increasing() {
    let mut prev = f64::INFINITY;
    for step in 0..200 {
        let t = step as f64 * 250.0;
        let e = pulse_envelope(t, 0.1, 0.5, 0.95).unwrap();
        assert!(e <= prev + 1e-15, "envelope grew at t={t}");
        assert!(e >= 0.0);
        prev = e;
    }
}

#[test]
fn test_pulse_envelope_starts_at_base() {
    assert_eq!(pulse_envelope(0.0, 0.1, 0.5, 0.95).unwrap(), 0.1);
}

#[test]
fn test_pulse_amplitude_bounded_by_base() {
    for step in 0..2_000 {
        let t = step as f64 * 37.0;
        let a = pulse_amplitude(t, 0.1, 0.5, 0.95).unwrap();
        assert!(
            a.abs() <= 0.1 + 1e-15,
            "amplitude {a} exceeded base at t={t}"
        );
    }
}

#[test]
fn test_pulse_amplitude_zero_at_sine_zero_crossings() {
    // f = 0.5 Hz: sin crosses zero every 1000 ms.
    assert_eq!(pulse_amplitude(0.0, 0.1, 0.5, 0.95).unwrap(), 0.0);
    let a = pulse_amplitude(1_000.0, 0.1, 0.5, 0.95).unwrap();
    assert!(a.abs() < 1e-12, "expected ~0 at half period, got {a}");
}

#[test]
fn test_pulse_rejects_negative_time() {
    assert!(matches!(
        pulse_amplitude(-0.5, 0.1, 0.5, 0.95),
        Err(InputValidationError::OutOfDomain { name: "elapsed_ms", .. })
    ));
}

#[test]
fn test_pulse_rejects_damping_above_one() {
    assert!(matches!(
        pulse_amplitude(100.0, 0.1, 0.5, 1.5),
        Err(InputValidationError::OutOfDomain { name: "damping", .. })
    ));
}

#[test]
fn test_amplitude_for_disabled_pulse_is_flat() {
    let mut params = ParameterSet::load().unwrap();
    params.pulse.enabled = false;
    assert_eq!(amplitude_for(&params.pulse, 1234.0).unwrap(), 0.0);
    // A bad clock still errors even when disabled.
    assert!(amplitude_for(&params.pulse, -1.0).is_err());
}

// ---- Weighted selection ----

#[test]
fn test_weighted_select_spec_fixtures() {
    let candidates = [Weighted::new("A", 0.3), Weighted::new("B", 0.7)];
    assert_eq!(*weighted_select(&candidates, 0.1).unwrap(), "A");
    assert_eq!(*weighted_select(&candidates, 0.5).unwrap(), "B");
    // Boundary is exactly at the first cumulative weight.
    assert_eq!(*weighted_select(&candidates, 0.299_999).unwrap(), "A");
    assert_eq!(*weighted_select(&candidates, 0.3).unwrap(), "B");
}

#[test]
fn test_weighted_select_normalizes() {
    // Same ratios, unnormalized weights: identical intervals.
    let candidates = [Weighted::new("A", 3.0), Weighted::new("B", 7.0)];
    assert_eq!(*weighted_select(&candidates, 0.1).unwrap(), "A");
    assert_eq!(*weighted_select(&candidates, 0.3).unwrap(), "B");
}

#[test]
fn test_weighted_select_deterministic() {
    let candidates = [
        Weighted::new(PowerupKind::Shield, 0.3),
        Weighted::new(PowerupKind::SpeedBoost, 0.4),
        Weighted::new(PowerupKind::Invincibility, 0.1),
    ];
    for step in 0..100 {
        let draw = step as f64 / 100.0;
        let a = *weighted_select(&candidates, draw).unwrap();
        let b = *weighted_select(&candidates, draw).unwrap();
        assert_eq!(a, b, "selection diverged for draw {draw}");
    }
}

#[test]
fn test_weighted_select_frequencies_match_weights() {
    let candidates = [
        Weighted::new("A", 0.2),
        Weighted::new("B", 0.3),
        Weighted::new("C", 0.5),
    ];
    let n = 10_000;
    let mut counts = [0u32; 3];
    for i in 0..n {
        let draw = i as f64 / n as f64;
        match *weighted_select(&candidates, draw).unwrap() {
            "A" => counts[0] += 1,
            "B" => counts[1] += 1,
            _ => counts[2] += 1,
        }
    }
    // A uniform grid of draws lands exactly on the normalized weights.
    assert_eq!(counts, [2_000, 3_000, 5_000]);
}

#[test]
fn test_weighted_select_single_candidate() {
    let candidates = [Weighted::new("only", 0.05)];
    assert_eq!(*weighted_select(&candidates, 0.0).unwrap(), "only");
    assert_eq!(*weighted_select(&candidates, 0.999_999).unwrap(), "only");
}

#[test]
fn test_weighted_select_rejects_bad_input() {
    let empty: [Weighted<&str>; 0] = [];
    assert!(matches!(
        weighted_select(&empty, 0.5),
        Err(InputValidationError::EmptyCandidates)
    ));

    let candidates = [Weighted::new("A", 0.3)];
    assert!(weighted_select(&candidates, 1.0).is_err());
    assert!(weighted_select(&candidates, -0.01).is_err());

    let bad = [Weighted::new("A", 0.0)];
    assert!(matches!(
        weighted_select(&bad, 0.5),
        Err(InputValidationError::OutOfDomain { name: "rarity", .. })
    ));
}

#[test]
fn test_eligible_powerups_declaration_order() {
    let params = ParameterSet::load().unwrap();
    let all = eligible_powerups(&params.powerups, |_| false);
    let kinds: Vec<PowerupKind> = all.iter().map(|w| w.kind).collect();
    assert_eq!(kinds, PowerupKind::ALL.to_vec());
    assert_eq!(all[0].rarity, 0.3);
}

#[test]
fn test_eligible_powerups_skips_cooldowns() {
    let params = ParameterSet::load().unwrap();
    let eligible = eligible_powerups(&params.powerups, |k| {
        matches!(k, PowerupKind::Shield | PowerupKind::SlowTime)
    });
    let kinds: Vec<PowerupKind> = eligible.iter().map(|w| w.kind).collect();
    assert_eq!(
        kinds,
        vec![
            PowerupKind::SpeedBoost,
            PowerupKind::DoublePoints,
            PowerupKind::Invincibility,
        ]
    );
}

#[test]
fn test_eligible_powerups_all_on_cooldown_yields_empty() {
    let params = ParameterSet::load().unwrap();
    let eligible = eligible_powerups(&params.powerups, |_| true);
    assert!(eligible.is_empty());
    // And selection over it reports the empty set to the caller.
    assert!(matches!(
        weighted_select(&eligible, 0.5),
        Err(InputValidationError::EmptyCandidates)
    ));
}

// ---- RNG helpers (seeded determinism) ----

#[test]
fn test_shuffle_is_permutation() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let mut items = vec![1, 2, 3, 4, 5, 6, 7, 8];
    let original = items.clone();
    shuffle(&mut rng, &mut items);
    let mut sorted = items.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, original, "shuffle changed the multiset");

    let mut empty: Vec<i32> = vec![];
    shuffle(&mut rng, &mut empty);
    assert!(empty.is_empty());

    let mut single = vec![9];
    shuffle(&mut rng, &mut single);
    assert_eq!(single, vec![9]);
}

#[test]
fn test_same_seed_same_sequence() {
    let mut rng_a = ChaCha8Rng::seed_from_u64(12345);
    let mut rng_b = ChaCha8Rng::seed_from_u64(12345);

    assert_eq!(random_id(&mut rng_a), random_id(&mut rng_b));
    assert_eq!(uuid_v4(&mut rng_a), uuid_v4(&mut rng_b));
    assert_eq!(random_color(&mut rng_a), random_color(&mut rng_b));

    let mut items_a = vec![1, 2, 3, 4, 5];
    let mut items_b = items_a.clone();
    shuffle(&mut rng_a, &mut items_a);
    shuffle(&mut rng_b, &mut items_b);
    assert_eq!(items_a, items_b);
}

#[test]
fn test_different_seeds_diverge() {
    let mut rng_a = ChaCha8Rng::seed_from_u64(111);
    let mut rng_b = ChaCha8Rng::seed_from_u64(222);
    assert_ne!(random_id(&mut rng_a), random_id(&mut rng_b));
}

#[test]
fn test_random_id_shape() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let id = random_id(&mut rng);
    assert_eq!(id.len(), 26);
    assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
}

#[test]
fn test_uuid_v4_layout() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let id = uuid_v4(&mut rng);
    assert_eq!(id.len(), 36);
    let parts: Vec<&str> = id.split('-').collect();
    assert_eq!(parts.len(), 5);
    assert_eq!(parts[2].as_bytes()[0], b'4', "version nibble");
    assert!(
        matches!(parts[3].as_bytes()[0], b'8' | b'9' | b'a' | b'b'),
        "variant nibble, got {}",
        parts[3]
    );
}

#[test]
fn test_random_color_shape() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..100 {
        let c = random_color(&mut rng);
        assert_eq!(c.len(), 7);
        assert!(c.starts_with('#'));
        assert!(c[1..].bytes().all(|b| b.is_ascii_hexdigit()));
    }
}

#[test]
fn test_random_int_inclusive_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut saw_min = false;
    let mut saw_max = false;
    for _ in 0..1_000 {
        let v = random_int(&mut rng, -2, 2).unwrap();
        assert!((-2..=2).contains(&v));
        saw_min |= v == -2;
        saw_max |= v == 2;
    }
    assert!(saw_min && saw_max, "inclusive bounds never hit");

    // Degenerate range is legal; inverted is not.
    assert_eq!(random_int(&mut rng, 5, 5).unwrap(), 5);
    assert!(matches!(
        random_int(&mut rng, 3, 1),
        Err(InputValidationError::InvertedBounds { .. })
    ));
}

#[test]
fn test_random_element_uniform_pick() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let items = ["a", "b", "c"];
    for _ in 0..50 {
        let picked = random_element(&mut rng, &items).unwrap();
        assert!(items.contains(picked));
    }
    let empty: [&str; 0] = [];
    assert!(matches!(
        random_element(&mut rng, &empty),
        Err(InputValidationError::EmptyCandidates)
    ));
}
