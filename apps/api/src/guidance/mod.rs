// Student guidance: stream recommendation (10th grade) and department
// eligibility (12th grade). Pure rule evaluation, no I/O.

pub mod eligibility;
pub mod handlers;
pub mod input;
pub mod recommender;
pub mod streams;
