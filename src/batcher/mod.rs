mod planner;


pub use planner::{Batcher, SubRequest, DEFAULT_CEILING};
