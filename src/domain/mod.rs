// Domain layer: lawn, mower motion model and the output port. No I/O here.

pub mod model;
pub mod ports;
