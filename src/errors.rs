use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetroGraphError {
    #[error("connection error: {0}")]
    ConnectionError(String),
    #[error("schema error: {0}")]
    SchemaError(String),
    #[error("query error: {0}")]
    QueryError(String),
    #[error("inconsistent station data: {0}")]
    InconsistentData(String),
    #[error("unknown vertex: station {0} is not part of the graph")]
    UnknownVertex(i64),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl MetroGraphError {
    pub fn connection<T: Into<String>>(msg: T) -> Self {
        MetroGraphError::ConnectionError(msg.into())
    }

    pub fn schema<T: Into<String>>(msg: T) -> Self {
        MetroGraphError::SchemaError(msg.into())
    }

    pub fn query<T: Into<String>>(msg: T) -> Self {
        MetroGraphError::QueryError(msg.into())
    }

    pub fn inconsistent<T: Into<String>>(msg: T) -> Self {
        MetroGraphError::InconsistentData(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        MetroGraphError::NotFound(msg.into())
    }

    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        MetroGraphError::InvalidInput(msg.into())
    }

    /// Load failures leave no graph behind; everything else is a caller mistake.
    pub fn is_fatal_load(&self) -> bool {
        matches!(
            self,
            MetroGraphError::ConnectionError(_)
                | MetroGraphError::SchemaError(_)
                | MetroGraphError::QueryError(_)
                | MetroGraphError::InconsistentData(_)
        )
    }
}
