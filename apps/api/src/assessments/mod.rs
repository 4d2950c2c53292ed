// Assessment API: score a submitted profile, store the run, read it back.

pub mod handlers;
pub mod storage;
