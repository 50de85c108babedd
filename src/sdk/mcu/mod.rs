pub mod register;
pub mod schm;
