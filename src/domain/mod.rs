// Domain layer: run configuration, catalog models and the catalog port.
// No I/O here beyond what the port declares.

pub mod model;
pub mod ports;
