// Player profile domain: the structured input every assessment starts from.
// Wire vocabulary (league names, roles, ratings) matches the intake form exactly.

pub mod models;
pub mod validation;
