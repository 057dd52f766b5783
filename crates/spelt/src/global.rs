use maybe_unwind::capture_panic_info;
use std::{panic, sync::Once};

static PANIC_HOOK: Once = Once::new();

/// Route panics raised inside [`Suite::run_test`](crate::Suite::run_test)
/// to the unwind boundary instead of the standard error stream.
///
/// The panic message then becomes the failure message of the test case.
/// Panics raised anywhere else still reach the hook that was installed
/// before the first test case ran. Aborts never go through the hook since
/// they unwind with `resume_unwind`.
pub(crate) fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let prev_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if capture_panic_info(info) {
                tracing::trace!("captured a panic raised by a test body");
            } else {
                prev_hook(info);
            }
        }));
        tracing::debug!("installed the panic hook of the test runner");
    });
}
