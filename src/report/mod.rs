//! Human-readable output for a finished run

pub mod heatmap;

pub use heatmap::HeatmapGrid;

use crate::board::{Square, BOARD};
use crate::simulation::ProbabilityDistribution;

/// Squares called out in the summary, in print order
pub const NAMED_SQUARES: [Square; 7] = [
    Square::READING_RAILROAD,
    Square::PENNSYLVANIA_RAILROAD,
    Square::BO_RAILROAD,
    Square::SHORT_LINE_RAILROAD,
    Square::GO,
    Square::MEDITERRANEAN_AVENUE,
    Square::BOARDWALK,
];

/// Percentage of turns spent landing on each named square
pub fn named_squares_text(dist: &ProbabilityDistribution) -> String {
    let mut report = String::new();
    report.push_str("Probability (%) of landing on...\n");
    for square in NAMED_SQUARES {
        let label = format!("{}:", BOARD.name(square));
        report.push_str(&format!(
            "  {:<24}{:>6.2}\n",
            label,
            dist.percent_of_turns(square)
        ));
    }
    report
}

/// The `top` most landed-on squares, one per line
pub fn ranking_text(dist: &ProbabilityDistribution, top: usize) -> String {
    let mut report = String::new();
    report.push_str(&format!(
        "Top {} squares ({} games x {} turns, seed {})\n",
        top.min(crate::board::BOARD_SIZE),
        dist.games,
        dist.turns_per_game,
        dist.seed
    ));
    report.push_str("  Rank  Sq  Name                      %Turns  Per game\n");
    for (rank, (square, average)) in dist.ranked().into_iter().take(top).enumerate() {
        report.push_str(&format!(
            "  {:>4}  {:>2}  {:<24}  {:>6.2}  {:>8.3}\n",
            rank + 1,
            square.index(),
            BOARD.name(square),
            dist.percent_of_turns(square),
            average
        ));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::LandingCounts;

    fn jail_heavy() -> ProbabilityDistribution {
        let mut totals = LandingCounts::new();
        for _ in 0..8 {
            totals.record(Square::JAIL);
        }
        for _ in 0..4 {
            totals.record(Square::READING_RAILROAD);
        }
        totals.record(Square::BOARDWALK);
        ProbabilityDistribution::from_counts(&totals, 2, 10, 99)
    }

    #[test]
    fn test_named_squares_text() {
        let text = named_squares_text(&jail_heavy());
        assert!(text.starts_with("Probability (%) of landing on..."));
        assert!(text.contains("Reading Railroad:"));
        assert!(text.contains("Short Line Railroad:"));
        assert!(text.contains("Mediterranean Avenue:"));
        // 4 landings / 2 games / 10 turns
        assert!(text.contains("20.00"));
        assert!(text.contains(" 5.00"));
        assert_eq!(text.lines().count(), 1 + NAMED_SQUARES.len());
    }

    #[test]
    fn test_ranking_text_order() {
        let text = ranking_text(&jail_heavy(), 3);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("seed 99"));
        assert!(lines[2].contains("Jail"));
        assert!(lines[3].contains("Reading Railroad"));
        assert!(lines[4].contains("Boardwalk"));
    }
}
