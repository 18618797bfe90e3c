mod cache;

pub use cache::{CacheKey, ParticipationCache};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use domain::dto::{CreateTeamRequest, JoinTeamRequest, NewSubmission};
use domain::models::{
    Competition, CreatedSubmission, Event, EventStatus, LeaderboardEntry, MySubmission, MyTeam,
    Registration, TeamSummary,
};
use domain::participation::{submission_for_competition, team_for_event};
use domain::{DomainError, Participation, ParticipationInput, resolve};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{ClientError, Result};
use crate::session::Session;
use crate::traits::{ParticipationCommands, ParticipationSource};

/// Everything an event page shows about the viewer's involvement.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationView {
    pub event: Event,
    pub registration: Option<Registration>,
    pub team: Option<MyTeam>,
    pub submission: Option<MySubmission>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub participation: Participation,
}

impl ParticipationView {
    fn competition(&self) -> Result<&Competition> {
        self.event.competition.as_ref().ok_or_else(|| {
            DomainError::InvalidInput(format!("\"{}\" is not a competition", self.event.title))
                .into()
        })
    }
}

/// Loads and caches participation views, and routes participation changes
/// through the API so the cached view never outlives them.
pub struct ParticipationLoader<S> {
    source: Arc<S>,
    session: Arc<Session>,
    cache: ParticipationCache,
}

impl<S> ParticipationLoader<S>
where
    S: ParticipationSource + ParticipationCommands,
{
    pub fn new(source: Arc<S>, session: Arc<Session>) -> Self {
        Self {
            source,
            session,
            cache: ParticipationCache::new(),
        }
    }

    pub fn cache(&self) -> &ParticipationCache {
        &self.cache
    }

    pub async fn load(&self, event_id: Uuid, now: DateTime<Utc>) -> Result<ParticipationView> {
        let key = CacheKey::new(event_id, self.session.viewer());

        if let Some(view) = self.cache.get(&key)
            && view.event.has_ended(now) == view.participation.ended
        {
            debug!("Participation cache hit for event {}", event_id);
            return Ok(view);
        }

        let generation = self.cache.begin(key);
        let view = self.fetch(event_id, key.viewer, now).await?;
        self.cache.store(key, generation, view.clone());
        Ok(view)
    }

    async fn fetch(
        &self,
        event_id: Uuid,
        viewer: Option<Uuid>,
        now: DateTime<Utc>,
    ) -> Result<ParticipationView> {
        let event = self.source.event(event_id).await?;

        let registration = match viewer {
            Some(_) if event.status != EventStatus::Cancelled => {
                absent_on_error("registration", self.source.my_registration(event_id).await)
                    .flatten()
            }
            _ => None,
        };

        let mut teams = Vec::new();
        let mut submissions = Vec::new();
        let mut leaderboard = Vec::new();

        if registration.is_some()
            && let Some(competition) = event.competition.as_ref()
        {
            let records = async {
                if competition.is_team_based {
                    (
                        absent_on_error("teams", self.source.my_teams().await),
                        None,
                    )
                } else {
                    (
                        None,
                        absent_on_error("submissions", self.source.my_submissions().await),
                    )
                }
            };
            let board = async {
                if event.has_ended(now) {
                    absent_on_error(
                        "leaderboard",
                        self.source.leaderboard(competition.api_key()).await,
                    )
                } else {
                    None
                }
            };

            let ((my_teams, my_submissions), board) = tokio::join!(records, board);
            teams = my_teams.unwrap_or_default();
            submissions = my_submissions.unwrap_or_default();
            leaderboard = board.unwrap_or_default();
        }

        let participation = resolve(&ParticipationInput {
            viewer,
            event: &event,
            registration: registration.as_ref(),
            teams: &teams,
            submissions: &submissions,
            leaderboard_available: !leaderboard.is_empty(),
            now,
        });

        let team = team_for_event(&teams, event.id).cloned();
        if let Some(team) = &team
            && let Err(e) = team.check_single_leader()
        {
            warn!("{}", e);
        }
        let submission = event
            .competition
            .as_ref()
            .and_then(|competition| submission_for_competition(&submissions, competition))
            .cloned();

        debug!(
            "Event {} resolved to {} for viewer {:?}",
            event.id, participation.state, viewer
        );

        Ok(ParticipationView {
            event,
            registration,
            team,
            submission,
            leaderboard,
            participation,
        })
    }

    pub async fn register(&self, event_id: Uuid) -> Result<Registration> {
        let key = self.signed_in_key(event_id)?;
        let registration = self.source.register(event_id).await;
        self.cache.invalidate(key);
        registration
    }

    pub async fn create_team(&self, view: &ParticipationView, name: &str) -> Result<TeamSummary> {
        let key = self.signed_in_key(view.event.id)?;
        let competition = view.competition()?;
        if !competition.is_team_based {
            return Err(DomainError::InvalidInput(format!(
                "\"{}\" is an individual competition",
                view.event.title
            ))
            .into());
        }

        let team = self
            .source
            .create_team(competition.id, &CreateTeamRequest::new(name))
            .await;
        self.cache.invalidate(key);
        team
    }

    pub async fn join_team(&self, event_id: Uuid, invitation_code: &str) -> Result<Option<String>> {
        let key = self.signed_in_key(event_id)?;
        let message = self
            .source
            .join_team(&JoinTeamRequest::new(invitation_code))
            .await;
        self.cache.invalidate(key);
        message
    }

    pub async fn leave_team(&self, event_id: Uuid, team_id: Uuid) -> Result<Option<String>> {
        let key = self.signed_in_key(event_id)?;
        let message = self.source.leave_team(team_id).await;
        self.cache.invalidate(key);
        message
    }

    /// Submits for the viewer's team on team competitions, individually otherwise.
    pub async fn submit(
        &self,
        view: &ParticipationView,
        submission: &NewSubmission,
    ) -> Result<CreatedSubmission> {
        let key = self.signed_in_key(view.event.id)?;
        if !view.participation.can_submit() {
            return Err(DomainError::InvalidInput(format!(
                "Submissions are not open for you on \"{}\" ({})",
                view.event.title, view.participation.state
            ))
            .into());
        }
        let competition = view.competition()?;

        let created = match view.participation.team_id {
            Some(team_id) if competition.is_team_based => {
                self.source.submit_for_team(team_id, submission).await
            }
            _ => {
                self.source
                    .submit_individual(competition.id, submission)
                    .await
            }
        };
        self.cache.invalidate(key);

        if let Ok(created) = &created {
            info!("Submission {} recorded for event {}", created.id, view.event.id);
        }
        created
    }

    fn signed_in_key(&self, event_id: Uuid) -> Result<CacheKey> {
        match self.session.viewer() {
            Some(viewer) => Ok(CacheKey::new(event_id, Some(viewer))),
            None => Err(ClientError::NotSignedIn),
        }
    }
}

/// User-specific reads fail soft: the record is treated as missing.
fn absent_on_error<T>(what: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("Treating {} as absent: {}", what, e);
            None
        }
    }
}
