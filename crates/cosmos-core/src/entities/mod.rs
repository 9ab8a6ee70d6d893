//! Entity structs for all Cosmos domain objects.
//!
//! Each entity mirrors a JSON record served by the portal backend. All structs
//! derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and
//! schema export.

mod assignment;
mod auth;
mod cohort;
mod curriculum;
mod event;

pub use assignment::{Assignment, AssignmentSubmission, Grade};
pub use auth::{AuthCodeRequest, AuthCodeResponse, HealthStatus, VerifyCodeRequest, VerifyCodeResponse};
pub use cohort::{Cohort, User};
pub use curriculum::{Curriculum, Lesson};
pub use event::Event;
