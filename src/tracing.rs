pub use ::tracing::*;

/// Install a fmt subscriber when `RUST_ENV=DEBUG`, defaulting `RUST_LOG` to
/// debug output for this crate.
pub fn init_tracing() {
    if std::env::var("RUST_ENV").as_deref() != Ok("DEBUG") {
        return;
    }
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "mysql_tempdb=debug,info");
    }
    let _ = ::tracing_subscriber::fmt::try_init();
}
