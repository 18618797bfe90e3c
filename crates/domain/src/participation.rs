//! Derives what an event page offers the viewer from the records fetched for it.
//!
//! Resolution order:
//! 1. no viewer: `NotLoggedIn`
//! 2. cancelled event: `Cancelled`, whatever else is known
//! 3. no registration of the viewer for this event: `NotRegistered`
//! 4. event without competition: `Registered`
//! 5. ended (inclusive of the end instant) with a leaderboard: `EventEndedViewResults`
//! 6. team-based: `RegisteredNoTeam` / `RegisteredInTeam` / `RegisteredSubmitted`
//! 7. individual: `RegisteredCanSubmit` / `RegisteredSubmitted`

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Competition, Event, EventStatus, MySubmission, MyTeam, Registration};

#[derive(Debug, Clone, Copy)]
pub struct ParticipationInput<'a> {
    pub viewer: Option<Uuid>,
    pub event: &'a Event,
    pub registration: Option<&'a Registration>,
    pub teams: &'a [MyTeam],
    pub submissions: &'a [MySubmission],
    pub leaderboard_available: bool,
    pub now: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParticipationState {
    NotLoggedIn,
    Cancelled,
    NotRegistered,
    Registered,
    RegisteredNoTeam,
    RegisteredInTeam,
    RegisteredCanSubmit,
    RegisteredSubmitted,
    EventEndedViewResults,
}

impl ParticipationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotLoggedIn => "NOT_LOGGED_IN",
            Self::Cancelled => "CANCELLED",
            Self::NotRegistered => "NOT_REGISTERED",
            Self::Registered => "REGISTERED",
            Self::RegisteredNoTeam => "REGISTERED_NO_TEAM",
            Self::RegisteredInTeam => "REGISTERED_IN_TEAM",
            Self::RegisteredCanSubmit => "REGISTERED_CAN_SUBMIT",
            Self::RegisteredSubmitted => "REGISTERED_SUBMITTED",
            Self::EventEndedViewResults => "EVENT_ENDED_VIEW_RESULTS",
        }
    }
}

impl std::fmt::Display for ParticipationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParticipationAction {
    Login,
    Register,
    CreateTeam,
    JoinTeam,
    LeaveTeam,
    Submit,
    ViewSubmission,
    ViewLeaderboard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Participation {
    pub state: ParticipationState,
    pub ended: bool,
    pub has_competition: bool,
    pub team_id: Option<Uuid>,
    pub submission_id: Option<Uuid>,
}

impl Participation {
    /// Actions a front end may offer for this state. `Submit` is withheld once
    /// anything was submitted or the event is over.
    pub fn actions(&self) -> Vec<ParticipationAction> {
        use ParticipationAction::*;

        let open = !self.ended;
        let mut actions = Vec::new();

        match self.state {
            ParticipationState::Cancelled => return actions,
            ParticipationState::NotLoggedIn => actions.push(Login),
            ParticipationState::NotRegistered if open => actions.push(Register),
            ParticipationState::RegisteredNoTeam if open => {
                actions.extend([CreateTeam, JoinTeam]);
            }
            ParticipationState::RegisteredInTeam if open => {
                actions.extend([LeaveTeam, Submit]);
            }
            ParticipationState::RegisteredCanSubmit if open => actions.push(Submit),
            _ => {}
        }

        if self.submission_id.is_some() {
            actions.push(ViewSubmission);
        }
        if self.ended && self.has_competition {
            actions.push(ViewLeaderboard);
        }

        actions
    }

    pub fn can_submit(&self) -> bool {
        self.actions().contains(&ParticipationAction::Submit)
    }
}

/// First of the viewer's teams that competes in `event`; teams of other events are skipped.
pub fn team_for_event(teams: &[MyTeam], event_id: Uuid) -> Option<&MyTeam> {
    teams.iter().find(|team| team.belongs_to_event(event_id))
}

/// The viewer's individual submission to `competition`, recognised by competition id or by
/// the event the submission references.
pub fn submission_for_competition<'a>(
    submissions: &'a [MySubmission],
    competition: &Competition,
) -> Option<&'a MySubmission> {
    submissions.iter().find(|submission| {
        submission.competition.id == competition.id
            || submission.competition.event_id() == Some(competition.event_id)
    })
}

pub fn resolve(input: &ParticipationInput<'_>) -> Participation {
    let event = input.event;
    let ended = event.has_ended(input.now);
    let competition = event.competition.as_ref();

    let mut participation = Participation {
        state: ParticipationState::NotLoggedIn,
        ended,
        has_competition: competition.is_some(),
        team_id: None,
        submission_id: None,
    };

    let Some(viewer) = input.viewer else {
        return participation;
    };

    if event.status == EventStatus::Cancelled {
        participation.state = ParticipationState::Cancelled;
        return participation;
    }

    let registered = input.registration.is_some_and(|registration| {
        registration.event_id == event.id && registration.user_id == viewer
    });
    if !registered {
        participation.state = ParticipationState::NotRegistered;
        return participation;
    }

    let Some(competition) = competition else {
        participation.state = ParticipationState::Registered;
        return participation;
    };

    let state = competition_state(input, competition, &mut participation);
    participation.state = state;

    if ended && input.leaderboard_available {
        participation.state = ParticipationState::EventEndedViewResults;
    }

    participation
}

fn competition_state(
    input: &ParticipationInput<'_>,
    competition: &Competition,
    participation: &mut Participation,
) -> ParticipationState {
    if competition.is_team_based {
        match team_for_event(input.teams, input.event.id) {
            None => ParticipationState::RegisteredNoTeam,
            Some(team) => {
                participation.team_id = Some(team.id);
                match &team.submission {
                    None => ParticipationState::RegisteredInTeam,
                    Some(submission) => {
                        participation.submission_id = Some(submission.id);
                        ParticipationState::RegisteredSubmitted
                    }
                }
            }
        }
    } else {
        match submission_for_competition(input.submissions, competition) {
            None => ParticipationState::RegisteredCanSubmit,
            Some(submission) => {
                participation.submission_id = Some(submission.id);
                ParticipationState::RegisteredSubmitted
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        JudgingCriterion, MemberRole, MemberUser, SubmissionCompetitionRef, SubmissionContent,
        TeamCompetition, TeamEventRef, TeamMember, TeamSubmissionRef,
    };
    use chrono::{Duration, TimeZone};
    use rust_decimal::Decimal;

    struct Fixture {
        viewer: Uuid,
        event: Event,
        registration: Registration,
    }

    impl Fixture {
        fn new(competition: Option<bool>) -> Self {
            let viewer = Uuid::new_v4();
            let event_id = Uuid::new_v4();
            let competition = competition.map(|is_team_based| Competition {
                id: Uuid::new_v4(),
                event_id,
                is_team_based,
                team_size: None,
                min_team_size: Some(2),
                max_team_size: Some(4),
                judging_criteria: vec![JudgingCriterion::new("Quality", Decimal::from(50))],
            });

            let event = Event {
                id: event_id,
                title: "Code Sprint".to_string(),
                description: None,
                start_time: Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap(),
                end_time: Utc.with_ymd_and_hms(2025, 6, 2, 20, 0, 0).unwrap(),
                location: Some("Lab 3".to_string()),
                status: EventStatus::Published,
                max_participants: Some(60),
                organizer: None,
                competition,
                created_at: None,
            };

            let registration = Registration {
                id: Uuid::new_v4(),
                event_id,
                user_id: viewer,
                registered_at: event.start_time - Duration::days(3),
            };

            Self {
                viewer,
                event,
                registration,
            }
        }

        fn during(&self) -> DateTime<Utc> {
            self.event.start_time + Duration::hours(1)
        }

        fn competition_id(&self) -> Uuid {
            self.event.competition.as_ref().unwrap().id
        }

        fn team(&self, event_id: Uuid, submitted: bool) -> MyTeam {
            MyTeam {
                id: Uuid::new_v4(),
                name: "Borrow Checkers".to_string(),
                invitation_code: "BC2025".to_string(),
                competition: TeamCompetition {
                    id: Uuid::new_v4(),
                    event: TeamEventRef {
                        id: event_id,
                        title: "Some event".to_string(),
                        status: "PUBLISHED".to_string(),
                    },
                },
                members: vec![TeamMember {
                    team_id: None,
                    user_id: Some(self.viewer),
                    role: MemberRole::Leader,
                    user: MemberUser {
                        id: self.viewer,
                        first_name: "Sam".to_string(),
                        last_name: "Lee".to_string(),
                    },
                }],
                submission: submitted.then(|| TeamSubmissionRef { id: Uuid::new_v4() }),
            }
        }

        fn submission(&self, competition_id: Uuid) -> MySubmission {
            MySubmission {
                id: Uuid::new_v4(),
                content: SubmissionContent {
                    url: Some("https://example.org/project".to_string()),
                    description: Some("Project".to_string()),
                },
                submitted_at: self.during(),
                competition: SubmissionCompetitionRef {
                    id: competition_id,
                    event_id: None,
                    event: None,
                },
                team: None,
                final_score: None,
            }
        }

        fn input<'a>(
            &'a self,
            teams: &'a [MyTeam],
            submissions: &'a [MySubmission],
            now: DateTime<Utc>,
        ) -> ParticipationInput<'a> {
            ParticipationInput {
                viewer: Some(self.viewer),
                event: &self.event,
                registration: Some(&self.registration),
                teams,
                submissions,
                leaderboard_available: false,
                now,
            }
        }
    }

    #[test]
    fn test_no_viewer_is_not_logged_in() {
        let fx = Fixture::new(Some(true));
        let input = ParticipationInput {
            viewer: None,
            ..fx.input(&[], &[], fx.during())
        };

        let participation = resolve(&input);
        assert_eq!(participation.state, ParticipationState::NotLoggedIn);
        assert_eq!(participation.actions(), vec![ParticipationAction::Login]);
    }

    #[test]
    fn test_cancelled_dominates_every_combination() {
        let mut fx = Fixture::new(Some(true));
        fx.event.status = EventStatus::Cancelled;
        let event_id = fx.event.id;
        let competition_id = fx.competition_id();

        let team_sets = [
            vec![],
            vec![fx.team(event_id, false)],
            vec![fx.team(event_id, true)],
        ];
        let submission_sets = [vec![], vec![fx.submission(competition_id)]];
        let instants = [fx.during(), fx.event.end_time, fx.event.end_time + Duration::days(1)];

        for teams in &team_sets {
            for submissions in &submission_sets {
                for now in instants {
                    for registered in [true, false] {
                        for leaderboard_available in [true, false] {
                            let input = ParticipationInput {
                                registration: registered.then_some(&fx.registration),
                                leaderboard_available,
                                ..fx.input(teams, submissions, now)
                            };
                            let participation = resolve(&input);
                            assert_eq!(participation.state, ParticipationState::Cancelled);
                            assert!(participation.actions().is_empty());
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_missing_or_foreign_registration_is_not_registered() {
        let fx = Fixture::new(None);

        let input = ParticipationInput {
            registration: None,
            ..fx.input(&[], &[], fx.during())
        };
        let participation = resolve(&input);
        assert_eq!(participation.state, ParticipationState::NotRegistered);
        assert_eq!(participation.actions(), vec![ParticipationAction::Register]);

        let foreign = Registration {
            event_id: Uuid::new_v4(),
            ..fx.registration.clone()
        };
        let input = ParticipationInput {
            registration: Some(&foreign),
            ..fx.input(&[], &[], fx.during())
        };
        assert_eq!(resolve(&input).state, ParticipationState::NotRegistered);
    }

    #[test]
    fn test_event_without_competition_is_terminal_registered() {
        let fx = Fixture::new(None);

        for now in [fx.during(), fx.event.end_time + Duration::hours(2)] {
            let input = ParticipationInput {
                leaderboard_available: true,
                ..fx.input(&[], &[], now)
            };
            let participation = resolve(&input);
            assert_eq!(participation.state, ParticipationState::Registered);
            assert!(!participation.can_submit());
            assert!(participation.actions().is_empty());
        }
    }

    #[test]
    fn test_team_based_states() {
        let fx = Fixture::new(Some(true));
        let now = fx.during();

        let no_team = resolve(&fx.input(&[], &[], now));
        assert_eq!(no_team.state, ParticipationState::RegisteredNoTeam);
        assert_eq!(
            no_team.actions(),
            vec![ParticipationAction::CreateTeam, ParticipationAction::JoinTeam]
        );

        let teams = [fx.team(fx.event.id, false)];
        let in_team = resolve(&fx.input(&teams, &[], now));
        assert_eq!(in_team.state, ParticipationState::RegisteredInTeam);
        assert_eq!(in_team.team_id, Some(teams[0].id));
        assert!(in_team.can_submit());
    }

    #[test]
    fn test_submitted_team_gets_no_second_submission() {
        let fx = Fixture::new(Some(true));
        let teams = [fx.team(fx.event.id, true)];

        let participation = resolve(&fx.input(&teams, &[], fx.during()));
        assert_eq!(participation.state, ParticipationState::RegisteredSubmitted);
        assert!(!participation.can_submit());
        assert_eq!(
            participation.submission_id,
            teams[0].submission.as_ref().map(|s| s.id)
        );
        assert_eq!(participation.actions(), vec![ParticipationAction::ViewSubmission]);
    }

    #[test]
    fn test_unrelated_teams_are_ignored() {
        let fx = Fixture::new(Some(true));
        let unrelated = [
            fx.team(Uuid::new_v4(), true),
            fx.team(Uuid::new_v4(), false),
        ];
        assert_eq!(
            resolve(&fx.input(&unrelated, &[], fx.during())).state,
            ParticipationState::RegisteredNoTeam
        );

        let mixed = [
            fx.team(Uuid::new_v4(), true),
            fx.team(fx.event.id, false),
            fx.team(Uuid::new_v4(), true),
        ];
        let participation = resolve(&fx.input(&mixed, &[], fx.during()));
        assert_eq!(participation.state, ParticipationState::RegisteredInTeam);
        assert_eq!(participation.team_id, Some(mixed[1].id));
    }

    #[test]
    fn test_individual_states() {
        let fx = Fixture::new(Some(false));
        let now = fx.during();

        let other = [fx.submission(Uuid::new_v4())];
        let open = resolve(&fx.input(&[], &other, now));
        assert_eq!(open.state, ParticipationState::RegisteredCanSubmit);
        assert_eq!(open.actions(), vec![ParticipationAction::Submit]);

        let mine = [fx.submission(fx.competition_id())];
        let done = resolve(&fx.input(&[], &mine, now));
        assert_eq!(done.state, ParticipationState::RegisteredSubmitted);
        assert_eq!(done.submission_id, Some(mine[0].id));
        assert!(!done.can_submit());
    }

    #[test]
    fn test_individual_submission_matched_by_event_id() {
        let fx = Fixture::new(Some(false));
        let mut submission = fx.submission(Uuid::new_v4());
        submission.competition.event_id = Some(fx.event.id);

        let mine = [submission];
        let done = resolve(&fx.input(&[], &mine, fx.during()));
        assert_eq!(done.state, ParticipationState::RegisteredSubmitted);
        assert_eq!(done.submission_id, Some(mine[0].id));
    }

    #[test]
    fn test_end_boundary_is_inclusive() {
        let fx = Fixture::new(Some(false));
        let end = fx.event.end_time;

        let just_before = ParticipationInput {
            leaderboard_available: true,
            ..fx.input(&[], &[], end - Duration::milliseconds(1))
        };
        let before = resolve(&just_before);
        assert!(!before.ended);
        assert_eq!(before.state, ParticipationState::RegisteredCanSubmit);
        assert!(before.can_submit());

        let at_end = ParticipationInput {
            leaderboard_available: true,
            ..fx.input(&[], &[], end)
        };
        let after = resolve(&at_end);
        assert!(after.ended);
        assert_eq!(after.state, ParticipationState::EventEndedViewResults);
        assert_eq!(after.actions(), vec![ParticipationAction::ViewLeaderboard]);
    }

    #[test]
    fn test_ended_takes_precedence_over_submitted() {
        let fx = Fixture::new(Some(true));
        let teams = [fx.team(fx.event.id, true)];
        let now = fx.event.end_time + Duration::hours(1);

        let with_board = ParticipationInput {
            leaderboard_available: true,
            ..fx.input(&teams, &[], now)
        };
        let participation = resolve(&with_board);
        assert_eq!(participation.state, ParticipationState::EventEndedViewResults);
        assert_eq!(
            participation.actions(),
            vec![
                ParticipationAction::ViewSubmission,
                ParticipationAction::ViewLeaderboard
            ]
        );

        // Without a leaderboard the submitted state stays visible.
        let participation = resolve(&fx.input(&teams, &[], now));
        assert_eq!(participation.state, ParticipationState::RegisteredSubmitted);
    }

    #[test]
    fn test_ended_without_leaderboard_withholds_submit() {
        let fx = Fixture::new(Some(true));
        let teams = [fx.team(fx.event.id, false)];

        let participation = resolve(&fx.input(&teams, &[], fx.event.end_time));
        assert_eq!(participation.state, ParticipationState::RegisteredInTeam);
        assert!(!participation.can_submit());
        assert_eq!(participation.actions(), vec![ParticipationAction::ViewLeaderboard]);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let fx = Fixture::new(Some(true));
        let teams = [fx.team(fx.event.id, false), fx.team(Uuid::new_v4(), true)];
        let submissions = [fx.submission(fx.competition_id())];

        for now in [fx.during(), fx.event.end_time] {
            for leaderboard_available in [false, true] {
                let input = ParticipationInput {
                    leaderboard_available,
                    ..fx.input(&teams, &submissions, now)
                };
                assert_eq!(resolve(&input), resolve(&input));
            }
        }
    }
}
