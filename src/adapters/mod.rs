// Adapters layer: rendering and terminal interaction around the core.

pub mod output;
pub mod prompt;
