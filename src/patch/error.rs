use crate::path::Pointer;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PatchError {
    #[error("Failed to resolve path: {0}")]
    ResolveError(#[from] crate::resolve::ResolveError),

    #[error("Cannot remove the root of the document")]
    CannotRemoveRoot,

    #[error("Cannot move a value into one of its own children")]
    CannotMoveIntoChild,

    #[error("Path {path} has no parent")]
    MissingParent { path: Pointer },

    #[error("Path {path} has no final reference token")]
    MissingFinalToken { path: Pointer },

    #[error("Path {path} uses '{token}' which is not a valid array index")]
    InvalidArrayIndexToken { path: Pointer, token: String },

    #[error("Index {index} at {path} is out of bounds for an array of length {len}")]
    ArrayIndexOutOfBounds {
        path: Pointer,
        index: usize,
        len: usize,
    },

    #[error("Value at {parent} is not an object or array, found {actual}")]
    NotAContainer { parent: Pointer, actual: String },

    #[error("Target {path} does not exist")]
    TargetNotFound { path: Pointer },

    #[error("{} patch operation(s) failed", .0.len())]
    MultipleErrors(Vec<PatchError>),
}

impl PatchError {
    pub fn missing_parent(path: &Pointer) -> Self {
        PatchError::MissingParent { path: path.clone() }
    }

    pub fn missing_final_token(path: &Pointer) -> Self {
        PatchError::MissingFinalToken { path: path.clone() }
    }

    pub fn invalid_array_index_token(path: &Pointer, token: &str) -> Self {
        PatchError::InvalidArrayIndexToken {
            path: path.clone(),
            token: token.to_string(),
        }
    }

    pub fn index_out_of_bounds(path: &Pointer, index: usize, len: usize) -> Self {
        PatchError::ArrayIndexOutOfBounds {
            path: path.clone(),
            index,
            len,
        }
    }

    pub fn not_a_container(parent: &Pointer, actual: &str) -> Self {
        PatchError::NotAContainer {
            parent: parent.clone(),
            actual: actual.to_string(),
        }
    }

    pub fn target_not_found(path: &Pointer) -> Self {
        PatchError::TargetNotFound { path: path.clone() }
    }
}
