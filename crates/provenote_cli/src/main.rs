//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `provenote_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use provenote_core::name;

fn main() {
    println!("provenote_core version={}", provenote_core::core_version());
    println!(
        "provenote_core sample_note_name={}",
        name::note_name("build-infra", "cve-2024-0001")
    );
    println!(
        "provenote_core sample_occurrence_name={}",
        name::occurrence_name("build-infra", "5bd197cc-02cd-4bd8-8cf3-a2b75f983a3f")
    );
}
