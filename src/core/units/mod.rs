//! Hardware units modelled by the simulator.

/// Set-associative cache model and replacement policies.
pub mod cache;
