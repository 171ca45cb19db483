pub mod query;

pub use query::{
    Category, Constraint, EscalationPayload, EscalationStatus, ExtractionResult, QueryRequest,
    QueryResponse,
};
