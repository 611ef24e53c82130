//! Error types for the CAM tools crate.
//!
//! This module provides structured error types for estimator arithmetic,
//! artifact output, and calls into external collaborators.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by the force and tool-life estimators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimateError {
    /// An input is non-positive or not a finite number.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    /// The formula has no finite answer for these inputs.
    #[error("Undefined estimate: {0}")]
    UndefinedEstimate(String),
}

/// Failures reported by external collaborators (text generation, CAM).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CollaboratorError {
    /// The service could not be reached.
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with something unusable.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// No backend is configured or it refused the request.
    #[error("Collaborator unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur during CAM tool operations.
#[derive(Error, Debug)]
pub enum CamToolError {
    /// An estimate could not be produced.
    #[error("Estimate failed: {0}")]
    Estimate(#[from] EstimateError),

    /// The machining request itself is invalid.
    #[error("Invalid request: {0}")]
    Request(#[from] vmccopilot_core::Error),

    /// The artifact already exists and overwriting is disabled.
    #[error("Artifact already exists: {}", .0.display())]
    ArtifactExists(PathBuf),

    /// An uploaded mesh was rejected before reaching the CAM backend.
    #[error("Invalid mesh upload: {0}")]
    InvalidMesh(String),

    /// An external collaborator failed.
    #[error("Collaborator error: {0}")]
    Collaborator(#[from] CollaboratorError),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Result type alias for CAM tool operations.
pub type CamToolResult<T> = Result<T, CamToolError>;
