//! Declarative description of one documentation site and its deployment profiles.
//!
//! A [`Config`] is what lives in `_site.yml`: a base record plus named
//! [`Profile`]s.  [`Config::resolve`] picks one profile, validates the result and
//! hands back a [`SiteConfig`], the immutable root every renderer reads from.

mod config;
mod footer;
mod home;
mod i18n;
mod navbar;
mod plugin;
mod profile;
mod site;
mod snippet;
mod theme;
mod url;
mod version;

pub use self::config::*;
pub use self::footer::*;
pub use self::home::*;
pub use self::i18n::*;
pub use self::navbar::*;
pub use self::plugin::*;
pub use self::profile::*;
pub use self::site::*;
pub use self::snippet::*;
pub use self::theme::*;
pub use self::url::*;
pub use self::version::*;

pub use liquid_core::model::KString;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
