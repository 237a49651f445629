//! Permit/deny check in front of the CLI.
//!
//! Users and their Argon2 PHC hashes come from the `users` map of the
//! configuration. With no users configured the gate is open and changes are
//! recorded under the anonymous actor.

use crate::errors::{AppError, AppResult};
use argon2::Argon2;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use rand_core::OsRng;
use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

/// Environment variable read before prompting for a password.
pub const PASSWORD_ENV: &str = "RSHEETLOG_PASSWORD";

pub trait AuthGate {
    /// Whether any credential check is required at all.
    fn is_enabled(&self) -> bool;

    /// `Ok(true)` permits, `Ok(false)` denies.
    fn check(&self, user: &str, password: &str) -> AppResult<bool>;
}

pub struct Argon2Gate {
    users: BTreeMap<String, String>,
}

impl Argon2Gate {
    pub fn new(users: BTreeMap<String, String>) -> Self {
        Self { users }
    }
}

impl AuthGate for Argon2Gate {
    fn is_enabled(&self) -> bool {
        !self.users.is_empty()
    }

    fn check(&self, user: &str, password: &str) -> AppResult<bool> {
        match self.users.get(user) {
            Some(hash) => verify_password(password, hash),
            None => Ok(false),
        }
    }
}

/// Hash a password into an Argon2id PHC string.
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::Auth(format!("password hashing failed: {e}")))
}

/// Check a plaintext password against a stored PHC hash.
pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::Auth(format!("invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Password from `RSHEETLOG_PASSWORD`, else one line from stdin.
pub fn read_password(user: &str) -> AppResult<String> {
    if let Ok(p) = std::env::var(PASSWORD_ENV) {
        return Ok(p);
    }

    print!("Password for {user}: ");
    io::stdout().flush().ok();

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Run the gate; returns the actor to record in the change log.
///
/// `password` is only requested when the gate is enabled.
pub fn authorize<F>(gate: &dyn AuthGate, user: Option<&str>, password: F) -> AppResult<Option<String>>
where
    F: FnOnce(&str) -> AppResult<String>,
{
    if !gate.is_enabled() {
        return Ok(user.map(str::to_string));
    }

    let user = user.ok_or_else(|| AppError::AuthDenied("<none> (use --user)".to_string()))?;
    let pw = password(user)?;

    if gate.check(user, &pw)? {
        Ok(Some(user.to_string()))
    } else {
        Err(AppError::AuthDenied(user.to_string()))
    }
}
