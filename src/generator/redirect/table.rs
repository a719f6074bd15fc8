//! Built-in redirect table.
//!
//! A diff between the current page structure and the one before the
//! sections were reorganised. Used when `docs.toml` declares no rules.

use super::RedirectRule;

pub fn builtin_rules() -> Vec<RedirectRule> {
    vec![
        // Language -> Guides pages moved under Book
        RedirectRule::new("/language/guides", "/book").with_sub_paths(&[
            "types",
            "functions",
            "statements",
            "constants",
            "receive",
            "bounced",
            "external",
            "lifecycle",
            "send",
            "message",
            "deploy",
            "debug",
            "upgrades",
            "masterchain",
            "func",
            "config",
            "programmatic",
        ]),
        // Getting Started is part of Book -> Guides
        RedirectRule::new("/start", "/book/guides/getting-started"),
        RedirectRule::new("/start", "/book/guides/getting-started")
            .with_sub_paths(&["first", "deploy", "test"]),
        // Grammar became the Language specification page
        RedirectRule::new("/book/grammar", "/language/spec"),
        // Evolution moved under Language
        RedirectRule::new("/evolution", "/language/evolution/overview"),
        RedirectRule::new("/evolution", "/language/evolution").with_sub_paths(&[
            "OTP-001", "OTP-002", "OTP-003", "OTP-004", "OTP-005", "OTP-006",
        ]),
        // Changelog merged into the Evolution overview
        RedirectRule::new("/language/guides/changelog", "/language/evolution/overview"),
        // Tools are part of Ecosystem
        RedirectRule::new("/tools", "/ecosystem/tools")
            .with_sub_paths(&["typescript", "vs", "jetbrains"]),
        // Renamed pages
        RedirectRule::new("/book/message-modes", "/book/message-mode"),
        RedirectRule::new("/ecosystem/tools/vs", "/ecosystem/tools/vscode"),
    ]
}
