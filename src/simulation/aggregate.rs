//! Aggregator: many independent games averaged into landing frequencies
//!
//! Each game gets its own ChaCha8 stream (same base seed, stream = game
//! index), so the result depends only on the seed, never on how games are
//! scheduled. Counts are integers and are summed exactly before dividing.

use std::collections::BTreeMap;
use std::time::Instant;

use ordered_float::OrderedFloat;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::board::{Square, BOARD_SIZE};
use crate::core::config::SimulationConfig;
use crate::core::error::{Result, SimError};
use crate::simulation::deck::EventDeck;
use crate::simulation::game::{run_game, LandingCounts};

/// Average landings per game on every square
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredDistribution")]
pub struct ProbabilityDistribution {
    pub games: u32,
    pub turns_per_game: u32,
    /// Base seed the run used; replaying with it reproduces the output exactly
    pub seed: u64,
    /// Mean landings per game, indexed by square
    pub average_landings: Vec<f64>,
}

/// Wire form of a distribution, checked before it becomes one
#[derive(Deserialize)]
struct StoredDistribution {
    games: u32,
    turns_per_game: u32,
    seed: u64,
    average_landings: Vec<f64>,
}

impl TryFrom<StoredDistribution> for ProbabilityDistribution {
    type Error = SimError;

    fn try_from(stored: StoredDistribution) -> Result<Self> {
        if stored.average_landings.len() != BOARD_SIZE {
            return Err(SimError::MalformedDistribution(stored.average_landings.len()));
        }
        Ok(Self {
            games: stored.games,
            turns_per_game: stored.turns_per_game,
            seed: stored.seed,
            average_landings: stored.average_landings,
        })
    }
}

impl ProbabilityDistribution {
    /// Build from landing counts summed over `games` games
    pub fn from_counts(totals: &LandingCounts, games: u32, turns_per_game: u32, seed: u64) -> Self {
        let average_landings = totals
            .as_slice()
            .iter()
            .map(|&n| n as f64 / games as f64)
            .collect();

        Self {
            games,
            turns_per_game,
            seed,
            average_landings,
        }
    }

    /// Mean landings per game on `square`
    pub fn average(&self, square: Square) -> f64 {
        self.average_landings[square.index()]
    }

    /// Landings on `square` as a percentage of turns taken
    pub fn percent_of_turns(&self, square: Square) -> f64 {
        self.average(square) * 100.0 / self.turns_per_game as f64
    }

    /// Mean landings per game across the whole board
    pub fn total_average(&self) -> f64 {
        self.average_landings.iter().sum()
    }

    /// Square index → percentage of turns
    pub fn to_map(&self) -> BTreeMap<usize, f64> {
        Square::all()
            .map(|s| (s.index(), self.percent_of_turns(s)))
            .collect()
    }

    /// Squares from most to least landed on; ties keep board order
    pub fn ranked(&self) -> Vec<(Square, f64)> {
        let mut squares: Vec<_> = Square::all().map(|s| (s, self.average(s))).collect();
        squares.sort_by_key(|&(s, p)| (std::cmp::Reverse(OrderedFloat(p)), s));
        squares
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Run the full simulation described by `config`
pub fn simulate(config: &SimulationConfig) -> Result<ProbabilityDistribution> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(rand::random);
    let parallel = config.games >= config.parallel_threshold;
    let start = Instant::now();

    tracing::info!(
        games = config.games,
        turns = config.turns_per_game,
        seed,
        parallel,
        "Starting simulation"
    );

    if parallel {
        tracing::debug!(
            threads = rayon::current_num_threads(),
            threshold = config.parallel_threshold,
            "Running games in parallel"
        );
    } else {
        tracing::debug!(threshold = config.parallel_threshold, "Running games sequentially");
    }

    let deck = EventDeck::new();
    let play = |game: u32| -> Result<LandingCounts> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(game as u64);
        run_game(config.turns_per_game, &deck, &mut rng)
    };

    let totals = if parallel {
        (0..config.games)
            .into_par_iter()
            .map(play)
            .try_reduce(LandingCounts::new, |a, b| Ok(a + b))?
    } else {
        let mut totals = LandingCounts::new();
        for game in 0..config.games {
            totals += play(game)?;
        }
        totals
    };

    debug_assert!(totals.total() >= config.games as u64 * config.turns_per_game as u64);

    let distribution =
        ProbabilityDistribution::from_counts(&totals, config.games, config.turns_per_game, seed);

    tracing::info!(
        landings = totals.total(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Simulation complete"
    );

    Ok(distribution)
}

/// `simulate` with default settings for everything but the run size
pub fn simulate_games(games: u32, turns_per_game: u32) -> Result<ProbabilityDistribution> {
    simulate(&SimulationConfig::new(games, turns_per_game))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(games: u32, turns: u32, seed: u64) -> SimulationConfig {
        SimulationConfig::new(games, turns).with_seed(seed)
    }

    #[test]
    fn test_rejects_zero_games() {
        let result = simulate(&SimulationConfig::new(0, 100));
        assert!(matches!(result, Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_zero_turns() {
        let result = simulate_games(10, 0);
        assert!(matches!(result, Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn test_same_seed_is_bit_identical() {
        let a = simulate(&seeded(200, 100, 77)).unwrap();
        let b = simulate(&seeded(200, 100, 77)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.seed, 77);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut sequential = seeded(300, 50, 5);
        sequential.parallel_threshold = u32::MAX;
        let mut parallel = seeded(300, 50, 5);
        parallel.parallel_threshold = 1;

        assert_eq!(simulate(&sequential).unwrap(), simulate(&parallel).unwrap());
    }

    #[test]
    fn test_unseeded_run_reports_its_seed() {
        let first = simulate(&SimulationConfig::new(20, 30)).unwrap();
        let replay = simulate(&seeded(20, 30, first.seed)).unwrap();
        assert_eq!(first, replay);
    }

    #[test]
    fn test_average_landings_per_game_bounds() {
        let dist = simulate(&seeded(100, 100, 3)).unwrap();
        assert_eq!(dist.average_landings.len(), BOARD_SIZE);
        let total = dist.total_average();
        assert!((100.0..=200.0).contains(&total), "total {}", total);
        // Go To Jail always forwards, so it never ends a turn
        assert!(dist.average(Square::GO_TO_JAIL) < dist.average(Square::JAIL));
    }

    #[test]
    fn test_ranked_is_descending() {
        let dist = simulate(&seeded(100, 100, 11)).unwrap();
        let ranked = dist.ranked();
        assert_eq!(ranked.len(), BOARD_SIZE);
        for pair in ranked.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn test_ranked_ties_keep_board_order() {
        let mut totals = LandingCounts::new();
        totals.record(Square::new(7));
        let dist = ProbabilityDistribution::from_counts(&totals, 1, 1, 0);
        let ranked = dist.ranked();
        assert_eq!(ranked[0].0.index(), 7);
        assert_eq!(ranked[1].0, Square::GO);
        assert_eq!(ranked[2].0.index(), 1);
    }

    #[test]
    fn test_percent_and_map() {
        let mut totals = LandingCounts::new();
        for _ in 0..30 {
            totals.record(Square::JAIL);
        }
        let dist = ProbabilityDistribution::from_counts(&totals, 3, 50, 0);
        assert!((dist.average(Square::JAIL) - 10.0).abs() < 1e-12);
        assert!((dist.percent_of_turns(Square::JAIL) - 20.0).abs() < 1e-12);

        let map = dist.to_map();
        assert_eq!(map.len(), BOARD_SIZE);
        assert_eq!(map[&10], dist.percent_of_turns(Square::JAIL));
        assert_eq!(map[&0], 0.0);
    }

    #[test]
    fn test_json_output() {
        let dist = simulate(&seeded(10, 20, 1)).unwrap();
        let json = dist.to_json().unwrap();
        let back: ProbabilityDistribution = serde_json::from_str(&json).unwrap();
        assert_eq!(back.games, 10);
        assert_eq!(back.turns_per_game, 20);
        assert_eq!(back.seed, 1);
        for (a, b) in dist.average_landings.iter().zip(back.average_landings.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_json_with_short_board_rejected() {
        let json = r#"{"games":1,"turns_per_game":1,"seed":0,"average_landings":[1.0]}"#;
        let err = serde_json::from_str::<ProbabilityDistribution>(json).unwrap_err();
        assert!(err.to_string().contains("1 squares"), "{}", err);
    }

    #[test]
    fn test_json_with_full_board_accepted() {
        let landings = vec!["0.5"; BOARD_SIZE].join(",");
        let json = format!(
            r#"{{"games":2,"turns_per_game":4,"seed":9,"average_landings":[{}]}}"#,
            landings
        );
        let dist: ProbabilityDistribution = serde_json::from_str(&json).unwrap();
        assert_eq!(dist.average(Square::BOARDWALK), 0.5);
        assert_eq!(dist.seed, 9);
    }
}
