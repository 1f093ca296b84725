// code-tour/src/catalog.rs
//! Fixed catalogue of the tour: which files are worth a first read, plus the
//! project fixtures the loop relies on. All compile-time; order matters —
//! menu indices follow definition order, and the order is the suggested
//! reading sequence.

/// The tour stops: (label, path relative to the project root).
pub const TOUR_STOPS: &[(&str, &str)] = &[
    ("Application startup", "src/main.rs"),
    ("Configuration", "src/config.rs"),
    ("API handlers", "src/api/handlers.rs"),
    ("Video snapshot service", "src/services/video/snapshot.rs"),
    ("App state model", "src/models/app_state.rs"),
    ("Middleware", "src/api/middleware.rs"),
    ("System utilities", "src/utils/system.rs"),
];

/// Startup precondition: the tour only makes sense from the project root.
pub const PROJECT_MANIFEST: &str = "Cargo.toml";

/// Shown by the `a` command when present at the project root.
pub const ARCHITECTURE_DOC: &str = "ARCHITECTURE.md";

/// Directories the tree renderer never descends into (build artifacts,
/// dependency caches, VCS metadata). Applied at every depth.
pub const EXCLUDED_DIRS: &[&str] = &["target", "node_modules", ".git"];

/// Exclusion pattern in the form the external `tree` utility expects.
pub fn tree_exclude_pattern() -> String {
    EXCLUDED_DIRS.join("|")
}
