pub mod config;
pub mod decode;
pub mod order;
pub mod samples;
