//! Utility functions

mod m3u;

pub use m3u::{generate_extm3u, relativize, ExtInf};
