// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod common_result_and_error;
pub mod decl_macros;
pub mod stack_alloc_types;

// Re-export.
pub use common_result_and_error::*;
pub use stack_alloc_types::*;
