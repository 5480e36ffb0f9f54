#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const CRAYON_ASSERT_LEVEL_DEFINITION: u8 = CRAYON_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const CRAYON_ASSERT_LEVEL_DEFINITION: u8 = CRAYON_ASSERT_ADVANCED;

pub const CRAYON_ASSERT_SIMPLE: u8 = 1;
pub const CRAYON_ASSERT_MODERATE: u8 = 2;
pub const CRAYON_ASSERT_ADVANCED: u8 = 3;

#[macro_export]
#[doc(hidden)]
macro_rules! crayon_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::CRAYON_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CRAYON_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! crayon_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::CRAYON_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CRAYON_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! crayon_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::CRAYON_ASSERT_LEVEL_DEFINITION >= $crate::asserts::CRAYON_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}
