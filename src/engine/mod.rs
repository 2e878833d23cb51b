mod converter;

pub use converter::{ConvertEngine, RunSummary};
