//! A sample suite exercising every assertion, half of them failing on
//! purpose.
//!
//! Run it with `-f json` to get a machine-readable document, or with `-h` to
//! list the options.

use spelt::{
    require_bool_eq, require_int_eq, require_mem_eq, require_ptr_eq, require_str_eq,
    require_uint_eq, run_test, Context, Suite,
};

static PRINTER: u8 = 0;
static SCANNER: u8 = 0;

fn integers(ctx: &mut Context<'_>) {
    require_int_eq!(ctx, -1, -1);
    require_uint_eq!(ctx, 1, 1);
}

fn integer_failure(ctx: &mut Context<'_>) {
    require_int_eq!(ctx, 3, -5);
}

fn booleans(ctx: &mut Context<'_>) {
    require_bool_eq!(ctx, true, true);
    require_bool_eq!(ctx, false, false);
}

fn boolean_failure(ctx: &mut Context<'_>) {
    require_bool_eq!(ctx, true, false);
}

fn strings(ctx: &mut Context<'_>) {
    require_str_eq!(ctx, "foo", "foo");
}

fn string_failure_1(ctx: &mut Context<'_>) {
    require_str_eq!(ctx, "foo", "bar");
}

fn string_failure_2(ctx: &mut Context<'_>) {
    require_str_eq!(ctx, "foo", None::<&str>);
}

fn string_failure_3(ctx: &mut Context<'_>) {
    require_str_eq!(ctx, None::<&str>, "foo");
}

fn memory(ctx: &mut Context<'_>) {
    require_mem_eq!(ctx, b"foobar"[..3], b"foo"[..3]);
}

fn memory_failure_1(ctx: &mut Context<'_>) {
    require_mem_eq!(ctx, b"foobar"[..3], b"foo"[..2]);
}

fn memory_failure_2(ctx: &mut Context<'_>) {
    require_mem_eq!(ctx, b"foo\nbar", b"foo\tbar");
}

fn memory_failure_3(ctx: &mut Context<'_>) {
    require_mem_eq!(ctx, b"foobar"[..3], None::<&[u8]>);
}

fn memory_failure_4(ctx: &mut Context<'_>) {
    require_mem_eq!(ctx, None::<&[u8]>, b"foobar"[..3]);
}

fn pointers(ctx: &mut Context<'_>) {
    require_ptr_eq!(ctx, &PRINTER, &PRINTER);
}

fn pointer_failure_1(ctx: &mut Context<'_>) {
    require_ptr_eq!(ctx, &PRINTER, &SCANNER);
}

fn pointer_failure_2(ctx: &mut Context<'_>) {
    require_ptr_eq!(ctx, &PRINTER, None::<&u8>);
}

fn pointer_failure_3(ctx: &mut Context<'_>) {
    require_ptr_eq!(ctx, None::<&u8>, &SCANNER);
}

fn main() {
    let mut suite = Suite::from_env("main");
    suite.start();

    let _ = run_test!(suite, integers);
    let _ = run_test!(suite, integer_failure);

    let _ = run_test!(suite, booleans);
    let _ = run_test!(suite, boolean_failure);

    let _ = run_test!(suite, strings);
    let _ = run_test!(suite, string_failure_1);
    let _ = run_test!(suite, string_failure_2);
    let _ = run_test!(suite, string_failure_3);

    let _ = run_test!(suite, memory);
    let _ = run_test!(suite, memory_failure_1);
    let _ = run_test!(suite, memory_failure_2);
    let _ = run_test!(suite, memory_failure_3);
    let _ = run_test!(suite, memory_failure_4);

    let _ = run_test!(suite, pointers);
    let _ = run_test!(suite, pointer_failure_1);
    let _ = run_test!(suite, pointer_failure_2);
    let _ = run_test!(suite, pointer_failure_3);

    suite.print_results_and_exit();
}
