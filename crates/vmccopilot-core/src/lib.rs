//! # VMC Copilot Core
//!
//! Core types for VMC Copilot: the machining request data model, the
//! material strength table, and request validation.

pub mod data;
pub mod error;

pub use data::{
    parse_operation_sequence, AdvancedOptions, FinishType, FormLimits, MachiningRequest,
    Material, Operation, PartShape, ToolSpec, ToolType, WorkpieceOrientation,
    OTHER_STRENGTH_N_PER_MM2,
};

pub use error::{Error, Result};
