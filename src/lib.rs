//! # Stack Eleven
//!
//! A minimal Q&A service: users register, log in, post questions, and post
//! answers. Questions embed their answers as a single document, so each
//! question (with its answers) is read and updated atomically.
//!
//! ## Authentication
//!
//! Login issues a signed, time-bounded bearer token (2 hours). Verification
//! is stateless; there is no revocation or server-side session store.
//! Posting questions and answers requires a valid token, reads are public.
//!
//! ## Errors
//!
//! All failures carry a `kind` (validation, conflict, unauthenticated,
//! not-found, internal) plus a user-safe message. The API surface maps
//! kinds to HTTP status codes; driver details never reach the caller.
//! Login failures collapse "no such user" and "wrong password" into one
//! message to avoid leaking account existence.

pub mod api;
pub mod auth;
pub mod cli;
pub mod client;
pub mod error;
pub mod store;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }

    #[test]
    fn test_app_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with(env!("CARGO_PKG_NAME")));
        assert!(APP_USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
