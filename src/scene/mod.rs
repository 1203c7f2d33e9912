pub(crate) mod config;
pub(crate) mod defaults;
pub(crate) mod project;
pub(crate) mod property;
pub(crate) mod shader;
