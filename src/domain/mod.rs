// Domain layer: plain data holders and the read-only ports reporting depends on.

pub mod model;
pub mod ports;
