/// Return values accepted from test bodies.
///
/// A body returning `()` passes once it completes. A body returning
/// `Result<(), E>` may also use `?`; an `Err` counts as a failure reported at
/// the `run_test` call site, with the whole error chain (`{:#}`) as message.
///
/// ```no_run
/// # use spelt::{Context, Suite};
/// fn parses(_: &mut Context<'_>) -> anyhow::Result<()> {
///     let n: u32 = "42".parse()?;
///     anyhow::ensure!(n == 42, "unexpected value {}", n);
///     Ok(())
/// }
///
/// let mut suite = Suite::new("main");
/// let _ = suite.run_test("parses", parses);
/// ```
pub trait Termination: sealed::Sealed {
    #[doc(hidden)] // private API
    fn into_result(self) -> anyhow::Result<()>;
}

impl Termination for () {
    #[doc(hidden)] // private API
    #[inline]
    fn into_result(self) -> anyhow::Result<()> {
        Ok(())
    }
}

impl<E> Termination for Result<(), E>
where
    E: Into<anyhow::Error>,
{
    #[doc(hidden)] // private API
    #[inline]
    fn into_result(self) -> anyhow::Result<()> {
        self.map_err(Into::into)
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for () {}

    impl<E> Sealed for Result<(), E> where E: Into<anyhow::Error> {}
}
