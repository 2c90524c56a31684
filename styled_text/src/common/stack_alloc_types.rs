// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Stack allocated storage for the small strings and lists that make up an SGR command.
//! A command has at most 2 color fragments and 8 attribute fragments, and the longest
//! fragment (`48;2;255;255;255`) is 16 bytes, so none of these should spill onto the
//! heap in practice.

use smallstr::SmallString;
use smallvec::SmallVec;

// PERF: If you make this number too large, eg: more than 16, then it will slow down
// rendering.
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

/// Enough room for 2 colors and 8 attributes.
pub const INLINE_VEC_SIZE: usize = 10;

/// Stack allocated string storage for small strings. When this gets larger than
/// [`DEFAULT_STRING_STORAGE_SIZE`], it will be [`smallvec::SmallVec::spilled`] on the
/// heap.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

/// Stack allocated list. When this gets larger than [`INLINE_VEC_SIZE`], it will be
/// [`smallvec::SmallVec::spilled`] on the heap.
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
