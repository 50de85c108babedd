#[macro_export]
macro_rules! BIT {
    ( $x:expr ) => {
        1u32 << $x
    };
}

#[macro_export]
macro_rules! BIT_MASK_LEN {
    ( $x:expr ) => {
        $crate::BIT!($x) - 1
    };
}

// bits range: BIT_RNG!(8, 10)  0b0111_0000_0000,  start from 8, end at 10 inclusive
#[macro_export]
macro_rules! BIT_RNG {
    ( $s:expr, $e:expr ) => {
        $crate::BIT_MASK_LEN!($e - $s + 1) << $s
    };
}

/// Sets bit `$b` of the place expression `$x`.
#[macro_export]
macro_rules! BM_SET {
    ( $x:expr, $b:expr ) => {
        $x |= $crate::BIT!($b)
    };
}

/// Clears bit `$b` of the place expression `$x`.
#[macro_export]
macro_rules! BM_CLR {
    ( $x:expr, $b:expr ) => {
        $x &= !$crate::BIT!($b)
    };
}

#[macro_export]
macro_rules! BM_IS_SET {
    ( $x:expr, $b:expr ) => {
        ($x & $crate::BIT!($b)) != 0
    };
}

// Places `$v` into the field described by mask `$m` whose lowest bit is `$shift`.
#[macro_export]
macro_rules! MASK_VAL {
    ( $m:expr, $shift:expr, $v:expr ) => {
        ((($v) as u32) << $shift) & $m
    };
}
