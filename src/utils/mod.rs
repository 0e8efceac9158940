mod config;
mod pacer;

pub use config::Config;
pub use pacer::Pacer;
