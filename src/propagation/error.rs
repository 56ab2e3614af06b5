use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropagationError {
    #[error("invalid elements for {id}: {message}")]
    InvalidElements { id: u32, message: String },
    #[error("propagation failed for {id}: {message}")]
    Propagation { id: u32, message: String },
}

impl PropagationError {
    pub fn object_id(&self) -> u32 {
        match self {
            PropagationError::InvalidElements { id, .. } => *id,
            PropagationError::Propagation { id, .. } => *id,
        }
    }
}
