pub mod port_hw;
pub mod port_hw_types;
