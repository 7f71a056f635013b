use thiserror::Error;

pub type ConstraintResult<T> = Result<T, ConstraintError>;

#[derive(Debug, Error)]
pub enum ConstraintError {
    #[error("unknown axis in constraint group: {id}")]
    UnknownAxis { id: String },

    #[error("invalid axis id: {0}")]
    InvalidAxisId(String),

    #[error("invalid constraint weight for {id}: {weight}")]
    InvalidWeight { id: String, weight: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
