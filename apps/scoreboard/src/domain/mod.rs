//! Domain layer: pure scoring logic and the types it operates on.

pub mod allocation;
pub mod rules;

#[cfg(test)]
mod tests_allocation;

// Re-exports for ergonomics
pub use allocation::{allocate_points, Allocation, TeamSubmission};
pub use rules::{place_points, round_multiplier};
