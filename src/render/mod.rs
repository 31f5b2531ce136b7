pub(crate) mod cpu;
pub(crate) mod palette;
pub(crate) mod pose;
pub(crate) mod scene;
pub(crate) mod surface;
