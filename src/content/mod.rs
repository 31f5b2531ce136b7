pub(crate) mod builtin;
pub(crate) mod model;
pub(crate) mod timeline;
