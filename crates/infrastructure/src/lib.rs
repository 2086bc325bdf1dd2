//! hostd infrastructure layer
pub mod dns;
pub mod hosts;
