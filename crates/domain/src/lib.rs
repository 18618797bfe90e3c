pub mod dto;
pub mod error;
pub mod models;
pub mod participation;
pub mod phase;

pub use error::{DomainError, Result};
pub use participation::{
    Participation, ParticipationAction, ParticipationInput, ParticipationState, resolve,
};
pub use phase::EventPhase;
