pub mod job;
pub mod profile;

pub use job::JobRecord;
pub use profile::Profile;
