#![allow(non_camel_case_types)]

pub mod common;
pub mod drivers;
pub mod mcu;
