//! Stream recommendation for 10th-grade students.
//!
//! Three ordered threshold rules are tried first; when none fires, the stream
//! with the highest averaged interest wins, provided the marks clear that
//! stream's fallback cut-off.

use serde::{Deserialize, Serialize};

use crate::guidance::streams::StreamKind;

pub const NEED_IMPROVEMENT: &str = "Need improvement in marks for preferred stream";

/// Interest scores are self-reported (typically 1-5); marks are a percentage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenthScores {
    pub maths_interest: i64,
    pub science_interest: i64,
    pub bio_interest: i64,
    pub commerce_interest: i64,
    pub current_marks: i64,
}

/// Which rule produced the recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RulePath {
    BioMathsRule,
    PureScienceRule,
    CommerceRule,
    InterestFallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// `None` means no stream's marks requirement was met.
    pub stream: Option<StreamKind>,
    pub path: RulePath,
}

impl Recommendation {
    pub fn label(&self) -> &'static str {
        match self.stream {
            Some(kind) => kind.key(),
            None => NEED_IMPROVEMENT,
        }
    }
}

const INTEREST_THRESHOLD: i64 = 4;

pub fn recommend_stream(scores: &TenthScores) -> Recommendation {
    let TenthScores {
        maths_interest: maths,
        science_interest: science,
        bio_interest: bio,
        commerce_interest: commerce,
        current_marks: marks,
    } = *scores;

    let strong = |v: i64| v >= INTEREST_THRESHOLD;

    if strong(maths) && strong(science) && strong(bio) && marks >= 70 {
        return Recommendation {
            stream: Some(StreamKind::BioMaths),
            path: RulePath::BioMathsRule,
        };
    }
    if strong(maths) && strong(science) && marks >= 65 {
        return Recommendation {
            stream: Some(StreamKind::PureScience),
            path: RulePath::PureScienceRule,
        };
    }
    if strong(commerce) && marks >= 55 {
        return Recommendation {
            stream: Some(StreamKind::Commerce),
            path: RulePath::CommerceRule,
        };
    }

    Recommendation {
        stream: fallback_by_interest(maths, science, bio, commerce, marks),
        path: RulePath::InterestFallback,
    }
}

/// Averaged interest per stream: bio-maths over three subjects, pure science
/// over two, commerce as-is. Ties resolve in catalog order.
fn fallback_by_interest(
    maths: i64,
    science: i64,
    bio: i64,
    commerce: i64,
    marks: i64,
) -> Option<StreamKind> {
    // i128 keeps the sums exact for any pair or triple of i64 scores.
    let bio_maths = (i128::from(maths) + i128::from(science) + i128::from(bio)) as f64 / 3.0;
    let pure_science = (i128::from(maths) + i128::from(science)) as f64 / 2.0;
    let commerce = commerce as f64;
    let max = bio_maths.max(pure_science).max(commerce);

    if bio_maths == max && marks >= 60 {
        Some(StreamKind::BioMaths)
    } else if pure_science == max && marks >= 65 {
        Some(StreamKind::PureScience)
    } else if commerce == max && marks >= 55 {
        Some(StreamKind::Commerce)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(maths: i64, science: i64, bio: i64, commerce: i64, marks: i64) -> TenthScores {
        TenthScores {
            maths_interest: maths,
            science_interest: science,
            bio_interest: bio,
            commerce_interest: commerce,
            current_marks: marks,
        }
    }

    #[test]
    fn test_bio_maths_rule() {
        let r = recommend_stream(&scores(5, 4, 4, 1, 70));
        assert_eq!(r.stream, Some(StreamKind::BioMaths));
        assert_eq!(r.path, RulePath::BioMathsRule);
    }

    #[test]
    fn test_bio_maths_rule_needs_seventy() {
        // Falls through to the pure-science rule at 69.
        let r = recommend_stream(&scores(5, 5, 5, 1, 69));
        assert_eq!(r.stream, Some(StreamKind::PureScience));
        assert_eq!(r.path, RulePath::PureScienceRule);
    }

    #[test]
    fn test_pure_science_rule_ignores_bio() {
        let r = recommend_stream(&scores(4, 4, 1, 5, 65));
        assert_eq!(r.stream, Some(StreamKind::PureScience));
        assert_eq!(r.path, RulePath::PureScienceRule);
    }

    #[test]
    fn test_commerce_rule() {
        let r = recommend_stream(&scores(2, 2, 2, 4, 55));
        assert_eq!(r.stream, Some(StreamKind::Commerce));
        assert_eq!(r.path, RulePath::CommerceRule);
    }

    #[test]
    fn test_science_rules_take_precedence_over_commerce() {
        let r = recommend_stream(&scores(4, 4, 4, 5, 90));
        assert_eq!(r.stream, Some(StreamKind::BioMaths));
    }

    #[test]
    fn test_fallback_prefers_highest_average() {
        // bio_maths = 3.0, pure_science = 3.5, commerce = 1.0
        let r = recommend_stream(&scores(3, 4, 2, 1, 66));
        assert_eq!(r.stream, Some(StreamKind::PureScience));
        assert_eq!(r.path, RulePath::InterestFallback);
    }

    #[test]
    fn test_fallback_bio_maths_at_sixty() {
        // all averages equal 3.0 -> bio_maths wins the tie
        let r = recommend_stream(&scores(3, 3, 3, 3, 60));
        assert_eq!(r.stream, Some(StreamKind::BioMaths));
        assert_eq!(r.path, RulePath::InterestFallback);
    }

    #[test]
    fn test_fallback_tie_falls_to_next_stream_when_marks_short() {
        // tie at 3.0, marks 57: bio_maths needs 60, pure science 65, commerce 55
        let r = recommend_stream(&scores(3, 3, 3, 3, 57));
        assert_eq!(r.stream, Some(StreamKind::Commerce));
    }

    #[test]
    fn test_fallback_does_not_consider_non_maximal_streams() {
        // bio_maths and pure_science tie at 3.0 but marks clear neither; commerce is lower
        let r = recommend_stream(&scores(3, 3, 3, 1, 58));
        assert_eq!(r.stream, None);
        assert_eq!(r.label(), NEED_IMPROVEMENT);
    }

    #[test]
    fn test_fallback_commerce_with_low_interest() {
        // commerce interest 3 is the highest average, marks clear 55
        let r = recommend_stream(&scores(1, 1, 1, 3, 56));
        assert_eq!(r.stream, Some(StreamKind::Commerce));
        assert_eq!(r.path, RulePath::InterestFallback);
    }

    #[test]
    fn test_low_marks_and_no_interest_always_fallback_without_stream() {
        for marks in [-10, 0, 20, 40, 54] {
            let r = recommend_stream(&scores(0, 0, 0, 0, marks));
            assert_eq!(r.path, RulePath::InterestFallback, "marks {marks}");
            assert_eq!(r.stream, None, "marks {marks}");
        }
    }

    #[test]
    fn test_low_marks_always_take_fallback_path() {
        for maths in 0..=5 {
            for science in 0..=5 {
                for bio in 0..=5 {
                    for commerce in 0..=5 {
                        let r = recommend_stream(&scores(maths, science, bio, commerce, 54));
                        assert_eq!(r.path, RulePath::InterestFallback);
                        assert_eq!(r.stream, None);
                    }
                }
            }
        }
    }

    #[test]
    fn test_extreme_interest_does_not_overflow() {
        let r = recommend_stream(&scores(i64::MAX, 4, 4, 0, 0));
        assert_eq!(r.path, RulePath::InterestFallback);
        assert_eq!(r.stream, None);

        // pure_science averages MAX/2, ahead of bio_maths at MAX/3
        let r = recommend_stream(&scores(i64::MAX, 0, 0, 0, 65));
        assert_eq!(r.stream, Some(StreamKind::PureScience));
        assert_eq!(r.path, RulePath::InterestFallback);
    }

    #[test]
    fn test_label_uses_stream_key() {
        let r = recommend_stream(&scores(5, 5, 5, 0, 95));
        assert_eq!(r.label(), "bio_maths");
    }
}
