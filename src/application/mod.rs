// Application layer: wire mapping and session orchestration

pub mod mappers;
pub mod session;

pub use mappers::{build_request, result_from_response, SolveRequest, SolveResponse};
pub use session::{Session, SubmitError};
