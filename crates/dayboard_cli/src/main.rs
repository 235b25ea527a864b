//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `dayboard_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("dayboard_core version={}", dayboard_core::core_version());
    println!(
        "dayboard_core schema={}",
        dayboard_core::db::migrations::latest_version()
    );
    println!(
        "dayboard_core backup_file={}",
        dayboard_core::backup_file_name()
    );
}
