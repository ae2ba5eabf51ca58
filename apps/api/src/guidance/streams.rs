use serde::{Deserialize, Serialize};

/// The three tracks offered after the 10th grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamKind {
    BioMaths,
    PureScience,
    Commerce,
}

impl StreamKind {
    pub const ALL: [StreamKind; 3] = [
        StreamKind::BioMaths,
        StreamKind::PureScience,
        StreamKind::Commerce,
    ];

    pub fn key(self) -> &'static str {
        match self {
            StreamKind::BioMaths => "bio_maths",
            StreamKind::PureScience => "pure_science",
            StreamKind::Commerce => "commerce",
        }
    }

    pub fn info(self) -> StreamInfo {
        match self {
            StreamKind::BioMaths => StreamInfo {
                key: self,
                name: "Bio-Maths Group",
                description: "Biology + Mathematics for Medical and Engineering fields",
                subjects: &["Biology", "Mathematics", "Physics", "Chemistry"],
                careers: &[
                    "Medical Doctor",
                    "Engineer",
                    "Research Scientist",
                    "Biotechnologist",
                ],
                min_marks: 60,
            },
            StreamKind::PureScience => StreamInfo {
                key: self,
                name: "Pure Science Group",
                description:
                    "Physics, Chemistry, Mathematics for Engineering and Pure Sciences",
                subjects: &["Physics", "Chemistry", "Mathematics", "Computer Science"],
                careers: &["Engineer", "Scientist", "Researcher", "Data Analyst"],
                min_marks: 70,
            },
            StreamKind::Commerce => StreamInfo {
                key: self,
                name: "Commerce Group",
                description: "Commerce with Accounts, Business Studies and Economics",
                subjects: &[
                    "Accountancy",
                    "Business Studies",
                    "Economics",
                    "Mathematics",
                ],
                careers: &[
                    "Chartered Accountant",
                    "Company Secretary",
                    "Business Manager",
                    "Banker",
                ],
                min_marks: 55,
            },
        }
    }
}

/// Catalog entry shown alongside a recommendation.
///
/// `min_marks` is informational; the recommender applies its own thresholds.
#[derive(Debug, Clone, Serialize)]
pub struct StreamInfo {
    pub key: StreamKind,
    pub name: &'static str,
    pub description: &'static str,
    pub subjects: &'static [&'static str],
    pub careers: &'static [&'static str],
    pub min_marks: u32,
}

pub fn catalog() -> Vec<StreamInfo> {
    StreamKind::ALL.iter().map(|k| k.info()).collect()
}
