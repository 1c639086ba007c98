// Scoring pipeline: normalize -> validate -> score -> persist -> format.
// Only records that pass `normalize::validate` reach the scorer.

pub mod handlers;
pub mod normalize;
pub mod report;
pub mod scorer;
