// Domain layer: passenger and record types plus the predictor port.

pub mod model;
pub mod ports;
