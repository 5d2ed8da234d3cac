//! Process exit codes

pub const EXIT_SUCCESS: i32 = 0;
/// The input was rejected but nothing went wrong on our side
pub const EXIT_WARNING: i32 = 1;
pub const EXIT_ERROR: i32 = 2;
