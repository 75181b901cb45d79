use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradebookError {
    #[error("school not found: {school}")]
    SchoolNotFound { school: String },

    #[error("course not found: {course} in {school}")]
    CourseNotFound { school: String, course: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

pub type Result<T> = std::result::Result<T, GradebookError>;
