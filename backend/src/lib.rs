pub mod frame;
pub mod limiter;
pub mod system;
