//! Cheap always-on invariant checks that report the call site on failure.

pub fn assert_ord<T: PartialOrd>(_: &T) {}
pub fn assert_same_type<T, U>(_: &T, _: &U) {}

macro_rules! current_location {
    () => {
        format!("{}:{}", file!(), line!())
    };
}
#[allow(unused_imports)]
pub(crate) use current_location;

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
pub(crate) use check_lt;

macro_rules! check_ge {
    ($lhs:expr, $rhs:expr) => {{
        $crate::util::assert::assert_same_type(&$lhs, &$rhs);
        $crate::util::assert::assert_ord(&$lhs);
        if $lhs < $rhs {
            panic!(
                "check failed: {}: {} >= {}: {:?} vs. {:?}",
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
pub(crate) use check_ge;
