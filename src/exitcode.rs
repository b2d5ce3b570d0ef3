//! Process exit codes

/// Any failure: missing argument, copy, prompt, write or install error
pub const FAILURE: i32 = 1;
