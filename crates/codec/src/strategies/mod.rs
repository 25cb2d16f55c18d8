mod parallel;
mod sequential;

pub use parallel::{ParallelMapper, CHUNK_SIZE, PARALLEL_THRESHOLD};
pub use sequential::SequentialMapper;
