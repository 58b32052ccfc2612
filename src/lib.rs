//! Generates `VERSION.h`: `#define`s describing the source check-in
//! (`manifest.uuid`, `manifest`) and the release version (`VERSION`).

pub mod build_info;
pub mod error;
pub mod header;
pub mod model;
pub mod source;
pub mod util;

pub use error::{SourceKind, VersionError};
pub use header::{generate, Define, DefineValue, VersionHeader};
pub use util::config::{ConfigLoader, GeneratorConfig};
