//! Department eligibility for 12th-grade students.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwelfthScores {
    pub physics: i64,
    pub chemistry: i64,
    pub maths: i64,
    pub biology: i64,
    pub english: i64,
}

/// Sums are widened to `i128` so that no combination of `i64` scores overflows.
impl TwelfthScores {
    pub fn pcm(&self) -> i128 {
        wide_sum(&[self.physics, self.chemistry, self.maths])
    }

    pub fn pcb(&self) -> i128 {
        wide_sum(&[self.physics, self.chemistry, self.biology])
    }

    pub fn total(&self) -> i128 {
        wide_sum(&[
            self.physics,
            self.chemistry,
            self.maths,
            self.biology,
            self.english,
        ])
    }
}

fn wide_sum(values: &[i64]) -> i128 {
    values.iter().map(|&v| i128::from(v)).sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Department {
    #[serde(rename = "Engineering (B.Tech/B.E.)")]
    Engineering,
    #[serde(rename = "Medical (MBBS/BDS)")]
    Medical,
    #[serde(rename = "B.Sc. Pure Sciences")]
    PureSciences,
    #[serde(rename = "B.Com Commerce")]
    Commerce,
    #[serde(rename = "Business Administration")]
    BusinessAdministration,
    #[serde(rename = "Arts and Humanities")]
    ArtsAndHumanities,
    #[serde(rename = "Social Sciences")]
    SocialSciences,
}

impl Department {
    pub fn title(self) -> &'static str {
        match self {
            Department::Engineering => "Engineering (B.Tech/B.E.)",
            Department::Medical => "Medical (MBBS/BDS)",
            Department::PureSciences => "B.Sc. Pure Sciences",
            Department::Commerce => "B.Com Commerce",
            Department::BusinessAdministration => "Business Administration",
            Department::ArtsAndHumanities => "Arts and Humanities",
            Department::SocialSciences => "Social Sciences",
        }
    }
}

/// Each check is independent; matches are appended in a fixed order.
pub fn eligible_departments(scores: &TwelfthScores) -> Vec<Department> {
    let pcm = scores.pcm();
    let pcb = scores.pcb();
    let total = scores.total();
    let mut departments = Vec::new();

    if pcm >= 240 && scores.maths >= 75 && scores.physics >= 70 {
        departments.push(Department::Engineering);
    }
    if pcb >= 240 && scores.biology >= 75 && scores.chemistry >= 70 {
        departments.push(Department::Medical);
    }
    if pcm >= 210 || pcb >= 210 {
        departments.push(Department::PureSciences);
    }
    if scores.maths >= 60 && total >= 350 {
        departments.push(Department::Commerce);
        departments.push(Department::BusinessAdministration);
    }
    if total >= 300 {
        departments.push(Department::ArtsAndHumanities);
        departments.push(Department::SocialSciences);
    }

    departments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(physics: i64, chemistry: i64, maths: i64, biology: i64, english: i64) -> TwelfthScores {
        TwelfthScores {
            physics,
            chemistry,
            maths,
            biology,
            english,
        }
    }

    #[test]
    fn test_sums() {
        let s = scores(10, 20, 30, 40, 50);
        assert_eq!(s.pcm(), 60);
        assert_eq!(s.pcb(), 70);
        assert_eq!(s.total(), 150);
    }

    #[test]
    fn test_strong_pcm_without_biology() {
        let d = eligible_departments(&scores(80, 80, 80, 0, 0));
        assert!(d.contains(&Department::Engineering));
        assert!(d.contains(&Department::PureSciences));
        assert!(!d.contains(&Department::Medical));
        // total 240: below the commerce and arts cut-offs
        assert_eq!(d, vec![Department::Engineering, Department::PureSciences]);
    }

    #[test]
    fn test_strong_pcb_medical() {
        let d = eligible_departments(&scores(80, 80, 0, 80, 0));
        assert_eq!(d, vec![Department::Medical, Department::PureSciences]);
    }

    #[test]
    fn test_everything() {
        let d = eligible_departments(&scores(90, 90, 90, 90, 90));
        assert_eq!(
            d,
            vec![
                Department::Engineering,
                Department::Medical,
                Department::PureSciences,
                Department::Commerce,
                Department::BusinessAdministration,
                Department::ArtsAndHumanities,
                Department::SocialSciences,
            ]
        );
    }

    #[test]
    fn test_engineering_needs_maths_seventy_five() {
        // pcm 250 but maths 74
        let d = eligible_departments(&scores(96, 80, 74, 0, 0));
        assert!(!d.contains(&Department::Engineering));
        assert!(d.contains(&Department::PureSciences));
    }

    #[test]
    fn test_commerce_needs_maths_sixty() {
        // total 400 but maths 59
        let d = eligible_departments(&scores(70, 70, 59, 101, 100));
        assert!(!d.contains(&Department::Commerce));
        assert!(d.contains(&Department::ArtsAndHumanities));
    }

    #[test]
    fn test_arts_only_at_three_hundred() {
        let d = eligible_departments(&scores(60, 60, 50, 60, 70));
        assert_eq!(
            d,
            vec![Department::ArtsAndHumanities, Department::SocialSciences]
        );
    }

    #[test]
    fn test_extreme_scores_do_not_overflow() {
        let s = scores(i64::MAX, i64::MAX, i64::MAX, i64::MAX, i64::MAX);
        assert_eq!(s.total(), i128::from(i64::MAX) * 5);
        let d = eligible_departments(&s);
        assert_eq!(d.len(), 7);

        let low = scores(i64::MIN, i64::MIN, 0, 0, 0);
        assert_eq!(low.pcm(), i128::from(i64::MIN) * 2);
        assert!(eligible_departments(&low).is_empty());
    }

    #[test]
    fn test_nothing_for_low_scores() {
        assert!(eligible_departments(&scores(40, 40, 40, 40, 40)).is_empty());
        assert!(eligible_departments(&TwelfthScores::default()).is_empty());
    }

    #[test]
    fn test_serialized_titles() {
        for dept in eligible_departments(&scores(90, 90, 90, 90, 90)) {
            assert_eq!(serde_json::to_value(dept).unwrap(), dept.title());
        }
    }
}
