// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod attribute_set;

// Re-export.
pub use attribute_set::*;
