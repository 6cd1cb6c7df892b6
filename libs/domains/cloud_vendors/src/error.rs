use thiserror::Error;

#[derive(Debug, Error)]
pub enum CloudVendorError {
    #[error("Requested Cloud Vendor does not exist")]
    NotFound,

    #[error("Invalid page request: {0}")]
    InvalidPageRequest(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type CloudVendorResult<T> = Result<T, CloudVendorError>;

impl From<sea_orm::DbErr> for CloudVendorError {
    fn from(err: sea_orm::DbErr) -> Self {
        CloudVendorError::Database(err.to_string())
    }
}

impl From<database::DatabaseError> for CloudVendorError {
    fn from(err: database::DatabaseError) -> Self {
        CloudVendorError::Database(err.to_string())
    }
}
