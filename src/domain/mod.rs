// Domain layer: transmitter models and the pipeline ports.

pub mod model;
pub mod ports;
