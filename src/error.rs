//! Error types for mounting, document queries and action decoding.

use thiserror::Error;

/// Errors raised when attaching a widget to its mount point.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("mount point '#{id}' does not exist in the document")]
    MountPointNotFound { id: String },

    #[error("mount point '#{id}' already has a mounted tree")]
    AlreadyMounted { id: String },
}

/// Errors raised by [`Document`](crate::Document) queries and simulated input.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("nothing is mounted at '#{id}'")]
    NotMounted { id: String },

    #[error("no button labeled '{label}' under '#{id}'")]
    ButtonNotFound { id: String, label: String },
}

/// Errors raised when decoding an action from its wire form.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("malformed action: {source}")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },
}
