mod email;
mod record;

pub use email::{EmailAddress, InvalidEmail};
pub use record::RecordPayload;
