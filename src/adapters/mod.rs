// Adapters layer: concrete drivers for the GPIO rig plus the simulated rig.
pub mod hc_sr04;
pub mod sg90;
pub mod sim;
