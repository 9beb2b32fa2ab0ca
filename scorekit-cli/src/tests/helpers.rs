//! Test helpers for isolating configuration layering from the host.

use figment::Jail;

/// Run `body` with an empty environment inside a temporary working directory.
///
/// Variables and the working directory are restored when the jail drops, so
/// ambient `SCOREKIT_*` variables or config files cannot leak into a test.
pub(super) fn in_jail<T>(body: impl FnOnce(&mut Jail) -> T) -> T {
    let mut outcome = None;
    Jail::expect_with(|jail| {
        jail.clear_env();
        outcome = Some(body(jail));
        Ok(())
    });
    outcome.expect("jail body should run")
}
