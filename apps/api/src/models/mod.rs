// Database row types, one file per table family.

pub mod assessment;
