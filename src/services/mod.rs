// Service exports
pub mod dataset;

pub use dataset::{parse_skill_list, read_candidates, read_interviews, DataStore, DatasetError};
