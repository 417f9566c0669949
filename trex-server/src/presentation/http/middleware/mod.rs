pub mod cors;
pub mod limits;
pub mod problem;
pub mod trace;
