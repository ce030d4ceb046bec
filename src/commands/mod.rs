//! Command implementations for cnab-publish CLI

pub mod completions;
pub mod fixup;
pub mod helpers;
pub mod load;
pub mod publish;
pub mod push;
pub mod version;
