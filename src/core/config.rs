pub const EPSILON: f32 = 1e-5;
/// Digits after the decimal point when a matrix or vector is displayed without an explicit
/// precision. Matches `printf("%f")`.
pub const DISPLAY_PRECISION: usize = 6;
