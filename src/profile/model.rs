//! The profile form model.
//!
//! The form caches whatever the user has typed so far in its own
//! storage slot, so half-finished input survives an app restart.
//! Validation is separate from caching: invalid values are still
//! cached, and `validate` is what a submit button checks.

use crate::storage::{FileStore, ProfileRecord, StoreWriter, WriteCmd};

/// Genres the profile form offers.
pub const GENRES: [&str; 5] = ["Pop", "Rock", "Jazz", "Classical", "Hip-Hop"];

/// Cached profile form state backed by the profile slot.
pub struct ProfileForm {
    record: ProfileRecord,
    writer: StoreWriter,
}

impl ProfileForm {
    /// Open the form over `store`, restoring any cached input.
    pub fn open(store: FileStore) -> Self {
        let record = match store.load_profile() {
            Ok(Some(record)) => record,
            Ok(None) => ProfileRecord::default(),
            Err(e) => {
                log::warn!("failed to load profile cache, starting empty: {e}");
                ProfileRecord::default()
            }
        };

        Self {
            record,
            writer: StoreWriter::new(store),
        }
    }

    pub fn username(&self) -> &str {
        &self.record.username
    }

    pub fn email(&self) -> &str {
        &self.record.email
    }

    pub fn genre(&self) -> &str {
        &self.record.genre
    }

    /// Update the username field and cache the form.
    pub fn set_username(&mut self, value: &str) {
        if value == self.record.username {
            return;
        }
        self.record.username = value.to_string();
        self.persist();
    }

    /// Update the email field and cache the form.
    pub fn set_email(&mut self, value: &str) {
        if value == self.record.email {
            return;
        }
        self.record.email = value.to_string();
        self.persist();
    }

    /// Update the genre field and cache the form.
    pub fn set_genre(&mut self, value: &str) {
        if value == self.record.genre {
            return;
        }
        self.record.genre = value.to_string();
        self.persist();
    }

    /// Check every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        validate_username(&self.record.username)?;
        validate_email(&self.record.email)?;
        validate_genre(&self.record.genre)?;
        Ok(())
    }

    /// Reset the form and delete the cached slot.
    pub fn clear(&mut self) {
        self.record = ProfileRecord::default();
        let _ = self.writer.send(WriteCmd::ClearProfile);
    }

    /// Drain pending cache writes and release the writer thread.
    pub fn close(self) {
        self.writer.shutdown();
    }

    fn persist(&self) {
        let _ = self.writer.send(WriteCmd::Profile(self.record.clone()));
    }
}

/// Usernames are 3-20 characters of letters, digits and underscores.
pub fn validate_username(username: &str) -> Result<(), String> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err("Username is required".to_string());
    }
    if username.len() < 3 {
        return Err("Username must be at least 3 characters".to_string());
    }
    if username.len() > 20 {
        return Err("Username must be less than 20 characters".to_string());
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err("Username can only contain letters, numbers, and underscores".to_string());
    }
    Ok(())
}

/// Emails need a non-empty local part, an `@`, and a dotted domain.
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Email is required".to_string());
    }

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !local.contains(char::is_whitespace)
                && domain
                    .rsplit_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
                && !domain.contains(char::is_whitespace)
                && !domain.contains('@')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err("Please enter a valid email address".to_string())
    }
}

/// The genre must be one of the offered `GENRES`.
pub fn validate_genre(genre: &str) -> Result<(), String> {
    if genre.is_empty() {
        return Err("Please select a favorite genre".to_string());
    }
    if !GENRES.contains(&genre) {
        return Err("Please select a favorite genre".to_string());
    }
    Ok(())
}
