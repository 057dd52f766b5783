//! The assertion macros, checked by a suite of their own.

use spelt::{
    fail, require, require_bool_eq, require_double_eq, require_false, require_float_eq,
    require_int_eq, require_mem_eq, require_none, require_ptr_eq, require_some, require_str_eq,
    require_uint_eq, run_test, Context, Formatter, JsonFormatter, Report, Status, Suite,
};
use std::io;
use termcolor::{Buffer, WriteColor};

/// Collects the failure messages of an inner suite.
#[derive(Default)]
struct Messages(Vec<(String, u32, String)>);

impl Formatter for Messages {
    fn report(&mut self, _: &mut dyn WriteColor, report: &Report<'_>) -> io::Result<()> {
        if let spelt::Outcome::Failed {
            file,
            line,
            message,
        } = report.outcome
        {
            self.0
                .push((file.to_owned(), line, format!("{}: {}", report.test_name, message)));
        }
        Ok(())
    }
}

/// Run `body` in a fresh suite and return the failure message it produced.
fn failure_of<F>(body: F) -> Option<String>
where
    F: FnOnce(&mut Context<'_>),
{
    let mut messages = Messages::default();
    {
        let mut suite = Suite::new("inner");
        suite.set_output(Buffer::no_color());
        suite.set_formatter(&mut messages);
        let _ = suite.run_test("t", body);
    }
    messages.0.pop().map(|(_, _, message)| message)
}

fn passing_checks(ctx: &mut Context<'_>) {
    let x = 3;
    require!(ctx, x > 2);
    require_false!(ctx, x > 5);
    require_int_eq!(ctx, -1, -1);
    require_int_eq!(ctx, x, 3i8);
    require_uint_eq!(ctx, 1u8, 1usize);
    require_float_eq!(ctx, 0.5f32, 0.5f32);
    require_double_eq!(ctx, 0.25, 0.25);
    require_bool_eq!(ctx, true, true);
    require_str_eq!(ctx, "foo", "foo");
    require_str_eq!(ctx, String::from("foo"), "foo");
    require_str_eq!(ctx, None::<&str>, None::<String>);
    require_mem_eq!(ctx, b"foobar"[..3], b"foo"[..]);
    require_mem_eq!(ctx, vec![1u8, 2, 3], [1u8, 2, 3]);
    require_ptr_eq!(ctx, &x, &x);
    require_none!(ctx, None::<u32>);
    require_some!(ctx, Some(x));
}

fn boolean_messages(ctx: &mut Context<'_>) {
    let x = false;
    require_str_eq!(
        ctx,
        failure_of(|ctx| require!(ctx, x)),
        Some("t: x is not true")
    );
    require_str_eq!(
        ctx,
        failure_of(|ctx| require_false!(ctx, !x)),
        Some("t: !x is not false")
    );
    require_str_eq!(
        ctx,
        failure_of(|ctx| require_bool_eq!(ctx, true, false)),
        Some("t: true is true but should be false")
    );
}

fn number_messages(ctx: &mut Context<'_>) {
    require_str_eq!(
        ctx,
        failure_of(|ctx| require_int_eq!(ctx, 3, -5)),
        Some("t: 3 is equal to 3 but should be equal to -5")
    );
    require_str_eq!(
        ctx,
        failure_of(|ctx| require_uint_eq!(ctx, 7u32, 8u32)),
        Some("t: 7u32 is equal to 7 but should be equal to 8")
    );
    require_str_eq!(
        ctx,
        failure_of(|ctx| require_double_eq!(ctx, 1.5, 2.0)),
        Some("t: 1.5 is equal to 1.5 but should be equal to 2.0")
    );
}

fn string_messages(ctx: &mut Context<'_>) {
    require_none!(ctx, failure_of(|ctx| require_str_eq!(ctx, "foo", "foo")));
    require_str_eq!(
        ctx,
        failure_of(|ctx| require_str_eq!(ctx, "foo", "bar")),
        Some("t: \"foo\" is the string \"foo\" but should be the string \"bar\"")
    );
    require_str_eq!(
        ctx,
        failure_of(|ctx| require_str_eq!(ctx, "foo", None::<&str>)),
        Some("t: \"foo\" is the string \"foo\" but should be null")
    );
    require_str_eq!(
        ctx,
        failure_of(|ctx| require_str_eq!(ctx, None::<&str>, "foo")),
        Some("t: None::<&str> is null but should be the string \"foo\"")
    );
}

fn memory_messages(ctx: &mut Context<'_>) {
    require_str_eq!(
        ctx,
        failure_of(|ctx| require_mem_eq!(ctx, b"foo", b"fo")),
        Some("t: b\"foo\" is 3 bytes long but should be 2 bytes long")
    );
    require_str_eq!(
        ctx,
        failure_of(|ctx| require_mem_eq!(ctx, b"foo\nbar", b"foo\tbar")),
        Some("t: b\"foo\\nbar\" contains \"foo\\nbar\" but should contain \"foo\\tbar\"")
    );
    require_str_eq!(
        ctx,
        failure_of(|ctx| require_mem_eq!(ctx, b"\x01z", None::<&[u8]>)),
        Some("t: b\"\\x01z\" contains \"\\001z\" but should be null")
    );
    require_str_eq!(
        ctx,
        failure_of(|ctx| require_mem_eq!(ctx, None::<&[u8]>, b"a\tb")),
        Some("t: None::<&[u8]> is null but should be the string \"a\\tb\"")
    );
}

fn pointer_messages(ctx: &mut Context<'_>) {
    let (a, b) = (1u32, 2u32);
    let message = failure_of(|ctx| require_ptr_eq!(ctx, &a, &b));
    require_some!(ctx, message);
    let message = message.unwrap_or_default();
    require!(ctx, message.starts_with("t: &a is equal to 0x"));
    require!(ctx, message.contains(&format!("{:p}", &b)));

    require_str_eq!(
        ctx,
        failure_of(|ctx| require_some!(ctx, None::<&u32>)),
        Some("t: None::<&u32> is null")
    );
    require_str_eq!(
        ctx,
        failure_of(|ctx| require_none!(ctx, Some(a))),
        Some("t: Some(a) is not null")
    );
}

fn explicit_failure(ctx: &mut Context<'_>) {
    require_str_eq!(
        ctx,
        failure_of(|ctx| fail!(ctx)),
        Some("t: explicitly failed")
    );
    require_str_eq!(
        ctx,
        failure_of(|ctx| fail!(ctx, "unexpected value: {}", 42)),
        Some("t: unexpected value: 42")
    );
}

fn failure_location(ctx: &mut Context<'_>) {
    let mut messages = Messages::default();
    let expected_line = {
        let mut suite = Suite::new("inner");
        suite.set_output(Buffer::no_color());
        suite.set_formatter(&mut messages);
        let line = line!() + 1;
        let _ = suite.run_test("t", |ctx| require!(ctx, 1 + 1 == 3));
        line
    };
    require_uint_eq!(ctx, messages.0.len(), 1);
    let (file, line, _) = &messages.0[0];
    require_str_eq!(ctx, file.as_str(), file!());
    require_uint_eq!(ctx, *line, expected_line);
}

fn body_stops_at_first_failure(ctx: &mut Context<'_>) {
    let mut reached = false;
    let mut suite = Suite::new("inner");
    suite.set_output(Buffer::no_color());
    let status = suite.run_test("t", |ctx| {
        require_int_eq!(ctx, 1, 2);
        reached = true;
    });
    drop(suite);
    require!(ctx, status == Status::Failed);
    require_false!(ctx, reached);
}

fn json_document(ctx: &mut Context<'_>) -> anyhow::Result<()> {
    let mut buf = Buffer::no_color();
    {
        let mut suite = Suite::new("json");
        suite.set_output(&mut buf);
        suite.set_formatter(JsonFormatter::new());
        suite.start();
        let _ = suite.run_test("ok", |_| ());
        let _ = suite.run_test("quoted", |ctx| require_str_eq!(ctx, "a\"b", "a\tb"));
        suite.print_results();
    }

    let doc: serde_json::Value = serde_json::from_slice(buf.as_slice())?;
    require_bool_eq!(ctx, doc["tests"]["ok"]["passed"] == true, true);
    require_str_eq!(
        ctx,
        doc["tests"]["quoted"]["error_message"].as_str(),
        Some("\"a\\\"b\" is the string \"a\"b\" but should be the string \"a\tb\"")
    );
    require_uint_eq!(ctx, doc["results"]["nb_failed_tests"].as_u64().unwrap_or(0), 1);
    Ok(())
}

fn main() {
    spelt::init_logger();

    let mut suite = Suite::new("test_harness");
    suite.start();

    let _ = run_test!(suite, passing_checks);
    let _ = run_test!(suite, boolean_messages);
    let _ = run_test!(suite, number_messages);
    let _ = run_test!(suite, string_messages);
    let _ = run_test!(suite, memory_messages);
    let _ = run_test!(suite, pointer_messages);
    let _ = run_test!(suite, explicit_failure);
    let _ = run_test!(suite, failure_location);
    let _ = run_test!(suite, body_stops_at_first_failure);
    let _ = run_test!(suite, json_document);

    suite.print_results_and_exit();
}
