pub mod checkin;
pub mod manifest;
pub mod release;

pub use checkin::CheckinId;
pub use manifest::ManifestDateRecord;
pub use release::{ReleaseVersion, ReleaseVersionComponents, ResourceVersionString};
