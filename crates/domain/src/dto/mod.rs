pub mod common;
pub mod competition;
pub mod event;
pub mod submission;
pub mod survey;
pub mod team;
pub mod user;

pub use common::{EventFilters, EventReportFilters, QueryParams, UserFilters, UserReportFilters};
pub use competition::{
    AssignJudgeRequest, CreateCompetitionRequest, CriterionInput, UpdateCompetitionRequest,
};
pub use event::{CreateEventRequest, UpdateEventRequest};
pub use submission::{EvaluationRequest, NewSubmission, SubmissionPayload};
pub use survey::SurveyResponseRequest;
pub use team::{CreateTeamRequest, JoinTeamRequest};
pub use user::{CreateJudgeRequest, UpdateProfileRequest, UpdateUserRequest};

use std::borrow::Cow;
use validator::ValidationError;

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank"))
    } else {
        Ok(())
    }
}

pub(crate) fn error_with_message(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Owned(message));
    error
}
