//! Render-time pieces driven by a resolved [`docsite_config::SiteConfig`].

pub mod catalog;
pub mod features;
pub mod snippet;

pub use catalog::*;
pub use features::*;
pub use snippet::*;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
