//! # filmcat binary
//!
//! The binary is intentionally thin: everything terminal-facing lives in
//! `filmcat::cli`, and this file only invokes `cli::run()` and maps a fatal
//! error (bad config, unreadable catalog at startup) to exit status 1.
//! Errors raised while the menu is running never reach this point; the shell
//! reports them and keeps going.

fn main() {
    if let Err(e) = filmcat::cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
