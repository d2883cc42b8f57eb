//! Dice roller
//!
//! Two six-sided dice. Doubles move the token on and roll again, so one
//! call to [`roll`] is a single compound move that keeps going for as long
//! as doubles keep coming up. The intermediate square reached by a doubles
//! throw is never landed on.

use rand::Rng;

pub const DIE_FACES: u32 = 6;

/// One throw of both dice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DicePair(pub u32, pub u32);

impl DicePair {
    pub fn throw(rng: &mut impl Rng) -> Self {
        DicePair(rng.gen_range(1..=DIE_FACES), rng.gen_range(1..=DIE_FACES))
    }

    pub fn is_double(&self) -> bool {
        self.0 == self.1
    }

    pub fn sum(&self) -> u32 {
        self.0 + self.1
    }
}

/// Total movement for one turn
///
/// No cap on the number of rerolls: each level continues with probability
/// 1/6, and capping it would change the distribution.
pub fn roll(rng: &mut impl Rng) -> u32 {
    let mut total = 0;
    loop {
        let pair = DicePair::throw(rng);
        total += pair.sum();
        if !pair.is_double() {
            return total;
        }
    }
}

/// Exact probability of each movement total in `0..=max_total`
///
/// P(t) = (non-double pairs summing to t) / 36 + sum over d of P(t - 2d) / 36.
/// Mass beyond `max_total` is dropped, so the vector sums to slightly
/// under 1 for small `max_total`.
pub fn exact_distribution(max_total: usize) -> Vec<f64> {
    let faces = DIE_FACES as usize;
    let outcomes = (faces * faces) as f64;
    let mut p = vec![0.0f64; max_total + 1];

    for t in 0..=max_total {
        let mut prob = 0.0;
        for a in 1..=faces {
            for b in 1..=faces {
                if a != b && a + b == t {
                    prob += 1.0 / outcomes;
                }
            }
        }
        for d in 1..=faces {
            if 2 * d < t {
                prob += p[t - 2 * d] / outcomes;
            }
        }
        p[t] = prob;
    }

    p
}
