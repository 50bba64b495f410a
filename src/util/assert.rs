//! Runtime checks that always fire, independent of `debug_assertions`.
//!
//! Each macro panics with the source location and the stringified expression, so a failed
//! self-check in the `lilith` binary points at the offending line.

pub fn assert_ord<T: PartialOrd>(_: &T) {}
pub fn assert_partial_eq<T: PartialEq>(_: &T) {}
pub fn assert_same_type<T, U>(_: &T, _: &U) {}
pub fn assert_type<T>(_: &T) {}

#[allow(unused_macros)]
#[macro_export]
macro_rules! current_location {
    () => {
        format!("{}:{}", file!(), line!())
    };
}
#[allow(unused_imports)]
pub use current_location;

#[allow(unused_macros)]
#[macro_export]
macro_rules! check {
    ($lhs:expr) => {{
        $crate::util::assert::assert_type::<bool>(&$lhs);
        if !$lhs {
            panic!(
                "check failed: {}: {}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
            );
        }
    }};
}
#[allow(unused_imports)]
pub use check;

#[allow(unused_macros)]
#[macro_export]
macro_rules! check_lt {
    ($lhs:expr, $rhs:expr) => {{
        $crate::util::assert::assert_same_type(&$lhs, &$rhs);
        $crate::util::assert::assert_ord(&$lhs);
        if $lhs >= $rhs {
            panic!(
                "check failed: {}: {} < {}: {:?} vs. {:?}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                $lhs,
                $rhs
            );
        }
    }};
}
#[allow(unused_imports)]
pub use check_lt;

#[allow(unused_macros)]
#[macro_export]
macro_rules! check_eq {
    ($lhs:expr, $rhs:expr) => {{
        $crate::util::assert::assert_same_type(&$lhs, &$rhs);
        $crate::util::assert::assert_partial_eq(&$lhs);
        if !($lhs == $rhs) {
            panic!(
                "check failed: {}: {} == {}: {:?} vs. {:?}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                $lhs,
                $rhs
            );
        }
    }};
}
#[allow(unused_imports)]
pub use check_eq;

/// Checks approximate equality via the left-hand side's `almost_eq()` method, so it works for
/// both [`Vec2`](crate::util::linalg::Vec2) and [`Mat3x3`](crate::util::linalg::Mat3x3).
#[allow(unused_macros)]
#[macro_export]
macro_rules! check_almost_eq {
    ($lhs:expr, $rhs:expr) => {{
        $crate::util::assert::assert_same_type(&$lhs, &$rhs);
        if !($lhs.almost_eq($rhs)) {
            panic!(
                "check failed: {}: {} ~= {}: {:?} vs. {:?}",
                $crate::util::assert::current_location!(),
                stringify!($lhs),
                stringify!($rhs),
                $lhs,
                $rhs
            );
        }
    }};
}
#[allow(unused_imports)]
pub use check_almost_eq;

#[cfg(test)]
mod tests {
    use crate::core::prelude::*;

    #[test]
    fn passing_checks_do_not_panic() {
        check!(1 + 1 == 2);
        check_lt!(1.0_f32, 2.0_f32);
        check_eq!(Vec2::one(), Vec2 { x: 1.0, y: 1.0 });
        check_almost_eq!(Mat3x3::identity(), Mat3x3::rotation(360.0));
    }

    #[test]
    #[should_panic(expected = "check failed")]
    fn failing_check_panics() {
        check_eq!(Vec2::zero(), Vec2::one());
    }

    #[test]
    #[should_panic(expected = "~=")]
    fn failing_almost_eq_reports_operator() {
        check_almost_eq!(Mat3x3::identity(), Mat3x3::zero());
    }
}
