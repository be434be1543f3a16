//! Request extractors that reject with `AppError` so failures keep the JSON error shape.

mod id;
mod json;
pub use id::ProfessorId;
pub use json::JsonBody;
