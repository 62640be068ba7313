// Domain layer: transient models and the task port. No I/O here.

pub mod model;
pub mod ports;
