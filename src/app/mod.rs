// Application layer: the interactive caller of the core.

pub mod session;
