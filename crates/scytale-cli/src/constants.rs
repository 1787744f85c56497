//! CLI constants.

/// Process exit codes.
///
/// 1 is left for unexpected failures and 2 for clap usage errors; cipher
/// failures start at 3 so scripts can tell them apart.
pub mod exit_codes {
    /// Unknown cipher method.
    pub const NOT_FOUND: i32 = 3;

    /// Key rejected by the cipher's validator.
    pub const INVALID_KEY: i32 = 4;

    /// Text or request body the cipher cannot process.
    pub const INVALID_INPUT: i32 = 5;

    /// Config file present but unusable.
    pub const INVALID_CONFIG: i32 = 6;
}
