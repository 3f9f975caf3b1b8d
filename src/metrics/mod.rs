pub mod recorder;

pub use recorder::init_metrics;
