//! Score types for job results
//!
//! Defines the data structures for the values written to the output file.

use std::fmt;

use rand::Rng;

/// Number of discrete score steps between 0.00 and 1.00 inclusive.
const SCORE_STEPS: u8 = 100;

/// A single score in the range 0.00..=1.00, quantized to hundredths.
///
/// Stored as integer hundredths so serialization is exact. Rendered in the
/// standard shortest-decimal form: `0.5` rather than `0.50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score(u8);

impl Score {
    /// Create a score from integer hundredths. Returns `None` above 100.
    pub fn from_hundredths(hundredths: u8) -> Option<Self> {
        if hundredths <= SCORE_STEPS {
            Some(Self(hundredths))
        } else {
            None
        }
    }

    /// Draw a score uniformly from {0.00, 0.01, ..., 1.00}.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(0..=SCORE_STEPS))
    }

    /// The score as integer hundredths (0..=100).
    pub fn hundredths(&self) -> u8 {
        self.0
    }

    /// The score as a fractional value (0.0..=1.0).
    pub fn value(&self) -> f64 {
        f64::from(self.0) / f64::from(SCORE_STEPS)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64 Display is the shortest round-tripping decimal, which is the
        // required form: 0 -> "0", 7 -> "0.07", 50 -> "0.5", 100 -> "1".
        write!(f, "{}", self.value())
    }
}

/// The three positional scores produced by one job run.
///
/// The scores carry no labels; consumers interpret them by position. The
/// three draws are independent, so duplicates within one record are possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultRecord {
    scores: [Score; 3],
}

impl ResultRecord {
    /// Build a record from three scores.
    pub fn new(scores: [Score; 3]) -> Self {
        Self { scores }
    }

    /// Draw three independent scores from the given source.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            scores: [Score::sample(rng), Score::sample(rng), Score::sample(rng)],
        }
    }

    /// The scores in positional order.
    pub fn scores(&self) -> &[Score; 3] {
        &self.scores
    }
}

impl fmt::Display for ResultRecord {
    /// Comma-separated scores, no trailing newline: `v1,v2,v3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.scores[0], self.scores[1], self.scores[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn score(n: u8) -> Score {
        Score::from_hundredths(n).unwrap()
    }

    #[test]
    fn test_score_bounds() {
        assert!(Score::from_hundredths(0).is_some());
        assert!(Score::from_hundredths(100).is_some());
        assert!(Score::from_hundredths(101).is_none());
    }

    #[test]
    fn test_score_display_shortest_form() {
        assert_eq!(score(0).to_string(), "0");
        assert_eq!(score(7).to_string(), "0.07");
        assert_eq!(score(50).to_string(), "0.5");
        assert_eq!(score(99).to_string(), "0.99");
        assert_eq!(score(100).to_string(), "1");
    }

    #[test]
    fn test_score_value() {
        assert_eq!(score(25).value(), 0.25);
        assert_eq!(score(100).value(), 1.0);
    }

    #[test]
    fn test_sample_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let s = Score::sample(&mut rng);
            assert!(s.hundredths() <= 100);
        }
    }

    #[test]
    fn test_record_display() {
        let record = ResultRecord::new([score(50), score(7), score(100)]);
        assert_eq!(record.to_string(), "0.5,0.07,1");
    }

    #[test]
    fn test_record_has_no_trailing_newline() {
        let mut rng = StdRng::seed_from_u64(7);
        let record = ResultRecord::sample(&mut rng);
        assert!(!record.to_string().ends_with('\n'));
    }
}
