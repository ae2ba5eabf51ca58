use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::guidance::eligibility::TwelfthScores;
use crate::guidance::recommender::TenthScores;

pub const INVALID_NUMBERS: &str = "Please enter valid numbers for all fields";

/// Raw 10th-grade form. Fields stay untyped so that bad input surfaces as one
/// validation message instead of a JSON rejection.
#[derive(Debug, Default, Deserialize)]
pub struct TenthForm {
    pub maths_interest: Option<Value>,
    pub science_interest: Option<Value>,
    pub bio_interest: Option<Value>,
    pub commerce_interest: Option<Value>,
    pub current_marks: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TwelfthForm {
    pub physics: Option<Value>,
    pub chemistry: Option<Value>,
    pub maths: Option<Value>,
    pub biology: Option<Value>,
    pub english: Option<Value>,
}

impl TryFrom<TenthForm> for TenthScores {
    type Error = AppError;

    fn try_from(form: TenthForm) -> Result<Self, Self::Error> {
        Ok(TenthScores {
            maths_interest: parse_score(form.maths_interest.as_ref())?,
            science_interest: parse_score(form.science_interest.as_ref())?,
            bio_interest: parse_score(form.bio_interest.as_ref())?,
            commerce_interest: parse_score(form.commerce_interest.as_ref())?,
            current_marks: parse_score(form.current_marks.as_ref())?,
        })
    }
}

impl TryFrom<TwelfthForm> for TwelfthScores {
    type Error = AppError;

    fn try_from(form: TwelfthForm) -> Result<Self, Self::Error> {
        Ok(TwelfthScores {
            physics: parse_score(form.physics.as_ref())?,
            chemistry: parse_score(form.chemistry.as_ref())?,
            maths: parse_score(form.maths.as_ref())?,
            biology: parse_score(form.biology.as_ref())?,
            english: parse_score(form.english.as_ref())?,
        })
    }
}

/// Missing and `null` count as 0. Integers and integer strings are accepted;
/// everything else is rejected.
pub fn parse_score(value: Option<&Value>) -> Result<i64, AppError> {
    match value {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Number(n)) => n.as_i64().ok_or_else(invalid),
        Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|_| invalid()),
        Some(_) => Err(invalid()),
    }
}

fn invalid() -> AppError {
    AppError::Validation(INVALID_NUMBERS.to_string())
}
