pub(crate) use anyhow::Context;
pub(crate) use docsite::Result;
