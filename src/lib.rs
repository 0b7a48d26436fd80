//! Builds the LLM Operator landing page from a resolved `_site.yml`.
//!
//! Everything rendered for one request reads the same immutable
//! [`docsite_config::SiteConfig`] plus a [`docsite_core::VersionContext`] resolved for
//! that request, so renders are deterministic and independent of each other.

pub mod build;
pub mod error;
pub mod page;
pub mod template;

pub use build::build;
pub use build::snippet;
pub use error::Error;
pub use error::Result;
