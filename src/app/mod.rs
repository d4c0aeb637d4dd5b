pub mod action;
pub mod gate_actuator;
