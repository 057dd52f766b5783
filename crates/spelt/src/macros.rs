macro_rules! hidden_item {
    ( $( $item:item )* ) => {
        $(
            #[doc(hidden)]
            $item
        )*
    };
}

/// Mark the current test case as failed and then terminate its execution.
///
/// ```no_run
/// # fn body(ctx: &mut spelt::Context<'_>) {
/// spelt::fail!(ctx, "unexpected value: {}", 42);
/// # }
/// ```
#[macro_export]
macro_rules! fail {
    ($ctx:ident) => {
        $crate::fail!($ctx, "explicitly failed")
    };
    ($ctx:ident, $($arg:tt)+) => {{
        use $crate::_test_reexports as __spelt;
        const LOCATION: __spelt::Location = __spelt::location!();
        $ctx.abort(&LOCATION, __spelt::format_args!($($arg)+))
    }};
}

/// Require that a boolean expression is `true`.
#[macro_export]
macro_rules! require {
    ($ctx:ident, $e:expr) => {{
        use $crate::_test_reexports as __spelt;
        const LOCATION: __spelt::Location = __spelt::location!();
        let value: bool = $e;
        __spelt::check::require_true($ctx, &LOCATION, __spelt::stringify!($e), value);
    }};
}

/// Require that a boolean expression is `false`.
#[macro_export]
macro_rules! require_false {
    ($ctx:ident, $e:expr) => {{
        use $crate::_test_reexports as __spelt;
        const LOCATION: __spelt::Location = __spelt::location!();
        let value: bool = $e;
        __spelt::check::require_false($ctx, &LOCATION, __spelt::stringify!($e), value);
    }};
}

#[doc(hidden)] // private API
#[macro_export]
macro_rules! __require_cmp {
    ($check:ident, $ctx:ident, $label:expr, $value:expr, $expected:expr) => {{
        use $crate::_test_reexports as __spelt;
        const LOCATION: __spelt::Location = __spelt::location!();
        let value = $value;
        let expected = $expected;
        __spelt::check::$check($ctx, &LOCATION, $label, value, expected);
    }};
}

/// Require two signed integers to be equal.
///
/// Both operands are converted to `i64` before the comparison.
#[macro_export]
macro_rules! require_int_eq {
    ($ctx:ident, $value:expr, $expected:expr $(,)?) => {
        $crate::__require_cmp!(
            require_int_eq,
            $ctx,
            $crate::_test_reexports::stringify!($value),
            $value as i64,
            $expected as i64
        )
    };
}

/// Require two unsigned integers to be equal.
///
/// Both operands are converted to `u64` before the comparison.
#[macro_export]
macro_rules! require_uint_eq {
    ($ctx:ident, $value:expr, $expected:expr $(,)?) => {
        $crate::__require_cmp!(
            require_uint_eq,
            $ctx,
            $crate::_test_reexports::stringify!($value),
            $value as u64,
            $expected as u64
        )
    };
}

/// Require two single precision floats to be exactly equal.
#[macro_export]
macro_rules! require_float_eq {
    ($ctx:ident, $value:expr, $expected:expr $(,)?) => {
        $crate::__require_cmp!(
            require_float_eq,
            $ctx,
            $crate::_test_reexports::stringify!($value),
            $value as f32,
            $expected as f32
        )
    };
}

/// Require two double precision floats to be exactly equal.
#[macro_export]
macro_rules! require_double_eq {
    ($ctx:ident, $value:expr, $expected:expr $(,)?) => {
        $crate::__require_cmp!(
            require_double_eq,
            $ctx,
            $crate::_test_reexports::stringify!($value),
            $value as f64,
            $expected as f64
        )
    };
}

/// Require two booleans to be equal.
#[macro_export]
macro_rules! require_bool_eq {
    ($ctx:ident, $value:expr, $expected:expr $(,)?) => {
        $crate::__require_cmp!(
            require_bool_eq,
            $ctx,
            $crate::_test_reexports::stringify!($value),
            $value,
            $expected
        )
    };
}

/// Require two strings to be equal.
///
/// Either operand may be an `Option`, where `None` stands for a null string.
#[macro_export]
macro_rules! require_str_eq {
    ($ctx:ident, $value:expr, $expected:expr $(,)?) => {
        $crate::__require_cmp!(
            require_str_eq,
            $ctx,
            $crate::_test_reexports::stringify!($value),
            &$value,
            &$expected
        )
    };
}

/// Require two byte strings to have the same length and contents.
///
/// Either operand may be an `Option`, where `None` stands for a null buffer.
#[macro_export]
macro_rules! require_mem_eq {
    ($ctx:ident, $value:expr, $expected:expr $(,)?) => {
        $crate::__require_cmp!(
            require_mem_eq,
            $ctx,
            $crate::_test_reexports::stringify!($value),
            &$value,
            &$expected
        )
    };
}

/// Require two references to point to the same address.
///
/// Either operand may be an `Option`, where `None` stands for a null pointer.
#[macro_export]
macro_rules! require_ptr_eq {
    ($ctx:ident, $value:expr, $expected:expr $(,)?) => {
        $crate::__require_cmp!(
            require_ptr_eq,
            $ctx,
            $crate::_test_reexports::stringify!($value),
            &$value,
            &$expected
        )
    };
}

/// Require an `Option` to be `None`.
#[macro_export]
macro_rules! require_none {
    ($ctx:ident, $e:expr) => {{
        use $crate::_test_reexports as __spelt;
        const LOCATION: __spelt::Location = __spelt::location!();
        let is_null = __spelt::Option::is_none(&$e);
        __spelt::check::require_null($ctx, &LOCATION, __spelt::stringify!($e), is_null);
    }};
}

/// Require an `Option` to be `Some`.
#[macro_export]
macro_rules! require_some {
    ($ctx:ident, $e:expr) => {{
        use $crate::_test_reexports as __spelt;
        const LOCATION: __spelt::Location = __spelt::location!();
        let is_null = __spelt::Option::is_none(&$e);
        __spelt::check::require_not_null($ctx, &LOCATION, __spelt::stringify!($e), is_null);
    }};
}

/// Run a test function, using its identifier as the test name.
#[macro_export]
macro_rules! run_test {
    ($suite:expr, $test:ident) => {
        $suite.run_test($crate::_test_reexports::stringify!($test), $test)
    };
}

#[doc(hidden)] // private API
#[macro_export]
macro_rules! __location {
    () => {{
        use $crate::_test_reexports as __spelt;
        __spelt::Location {
            file: __spelt::file!(),
            line: __spelt::line!(),
            column: __spelt::column!(),
        }
    }};
}
