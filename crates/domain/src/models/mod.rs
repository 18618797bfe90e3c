pub mod analytics;
pub mod competition;
pub mod envelope;
pub mod event;
pub mod registration;
pub mod submission;
pub mod survey;
pub mod team;
pub mod user;

pub use analytics::{AdminKpis, EventEngagement, UserGrowthPoint};
pub use competition::{
    Competition, CompetitionToJudge, JudgeAssignment, JudgeDashboard, JudgeProfile, JudgingCriterion,
};
pub use envelope::{ApiEnvelope, Page, PaginationMeta};
pub use event::{Event, EventStatus, Organizer};
pub use registration::{
    EventRegistrant, MyRegistration, RegisteredCompetitionRef, RegisteredEvent, RegistrantUser,
    Registration,
};
pub use submission::{
    CompetitionSubmission, CreatedSubmission, LeaderboardEntry, MySubmission, SubmissionCompetitionRef,
    SubmissionContent, SubmissionDetail, SubmissionEventRef, SubmissionStatus, SubmissionTeam,
    Submitter,
};
pub use survey::{
    QuestionSummary, SurveyQuestion, SurveyQuestionKind, SurveyQuestionResult, SurveyResults,
};
pub use team::{
    MemberRole, MemberUser, MyTeam, Team, TeamCompetition, TeamEventRef, TeamMember,
    TeamSubmissionRef, TeamSummary,
};
pub use user::{Role, RoleName, RoleRef, User, UserStatus};
