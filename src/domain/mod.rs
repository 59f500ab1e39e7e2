// Domain layer: the reading model and the hardware/network ports.
pub mod model;
pub mod ports;
