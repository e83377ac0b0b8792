//! Bounded random generation for round setup
//!
//! Every draw goes through the caller's RNG handle so a round is fully
//! reproducible from its seed.

use glam::Vec2;
use rand::Rng;

/// Uniform integer in `[min, max]`, inclusive on both ends.
pub fn random_int<R: Rng>(rng: &mut R, min: i32, max: i32) -> i32 {
    rng.random_range(min..=max)
}

/// Uniform float in `[min, max)`.
pub fn random_float<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    rng.random_range(min..max)
}

/// Uniform position in `[0, width) x [0, height)`.
pub fn random_position<R: Rng>(rng: &mut R, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        random_float(rng, 0.0, width),
        random_float(rng, 0.0, height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn random_int_covers_inclusive_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let v = random_int(&mut rng, 1, 4);
            assert!((1..=4).contains(&v));
            seen[(v - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "all values of a small range drawn");
    }

    #[test]
    fn random_float_stays_in_half_open_range() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let v = random_float(&mut rng, 2.0, 5.0);
            assert!((2.0..5.0).contains(&v));
        }
    }

    #[test]
    fn random_position_stays_in_field() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let p = random_position(&mut rng, 800.0, 600.0);
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..600.0).contains(&p.y));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);
        for _ in 0..32 {
            assert_eq!(
                random_position(&mut a, 800.0, 600.0),
                random_position(&mut b, 800.0, 600.0)
            );
        }
    }
}
