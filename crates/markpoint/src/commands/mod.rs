//! CLI command implementations.

pub(crate) mod hooks;
pub(crate) mod render;

pub(crate) use hooks::HooksArgs;
pub(crate) use render::RenderArgs;
