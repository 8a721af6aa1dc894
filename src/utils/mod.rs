pub mod memo;
pub mod naming;
