// Report assembly on top of the scoring engine.
// Implements: readiness dials, strengths, risk flags, action plan, funnel,
// benchmarks, narrative. Only the narrative may involve an LLM.

pub mod action_plan;
pub mod benchmarks;
pub mod builder;
pub mod funnel;
pub mod narrative;
pub mod readiness;
pub mod risks;
