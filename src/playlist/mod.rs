//! Playlist generation: tag reading, directory scanning and M3U writing

pub mod batch;
pub mod job;
pub mod scanner;
pub mod tags;
pub mod writer;

#[cfg(test)]
pub mod testing;

pub use batch::{run_job, JobError};
pub use job::{load_jobs, JobDescriptor};
pub use tags::{LoftyTagReader, TagReader};
pub use writer::WriteOutcome;
