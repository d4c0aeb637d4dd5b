pub mod gate;
pub mod scripted_gate;
