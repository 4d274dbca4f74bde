//! Domain models for one pipeline invocation.

pub mod event;
pub mod identity;
pub mod object;
pub mod outcome;

pub use event::UploadEvent;
pub use identity::{ContentIdentity, MediaKind};
pub use object::ObjectRecord;
pub use outcome::{InvocationOutcome, Outcome};
