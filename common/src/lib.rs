//! Deterministic snake simulation and the infrastructure around it: seeded
//! RNG, YAML config, best-score storage and an async tick-driven session.

pub mod config;
pub mod engine;
pub mod games;
pub mod high_score;
pub mod logger;
