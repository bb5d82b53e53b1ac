#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate serde;

#[macro_use]
pub mod log;
pub mod nl_loader;
pub mod projector;
pub mod exporter;
