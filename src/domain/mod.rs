// Domain layer: progress model and the roster port. No I/O.

pub mod model;
pub mod ports;
