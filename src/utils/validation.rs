use crate::domain::model::Gradebook;
use crate::utils::error::{GradebookError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GradebookError::ValidationError {
            message: format!("{}: path cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(GradebookError::ValidationError {
            message: format!("{}: path contains null bytes", field_name),
        });
    }

    Ok(())
}

/// Shape checks applied once at the persistence boundary. Serde already
/// guarantees the nested structure; the roster's uniqueness is the one
/// invariant the types cannot express.
impl Validate for Gradebook {
    fn validate(&self) -> Result<()> {
        for (name, school) in &self.schools {
            let mut seen = HashSet::new();
            for student in &school.students {
                if !seen.insert(student.as_str()) {
                    return Err(GradebookError::ValidationError {
                        message: format!("duplicate roster entry {} in {}", student, name),
                    });
                }
            }
        }
        Ok(())
    }
}
