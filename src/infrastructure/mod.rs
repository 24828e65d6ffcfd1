// Infrastructure layer: transport to the external solver service

pub mod client;

pub use client::{SolveError, SolverClient, DEFAULT_ENDPOINT};
