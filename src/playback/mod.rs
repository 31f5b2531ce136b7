pub(crate) mod beats;
pub(crate) mod engine;
pub(crate) mod player;
pub(crate) mod scheduler;
