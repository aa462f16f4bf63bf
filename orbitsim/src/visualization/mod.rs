pub mod scale;
pub mod trail;
pub mod frame;
