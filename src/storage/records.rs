use redb::ReadableTable;

use super::db::{Database, DatabaseError};
use super::models::{Submission, User};
use super::tables::*;

impl Database {
    // ========================================================================
    // Submission operations
    // ========================================================================

    /// Store a submission record
    pub fn put_submission(&self, submission: &Submission) -> Result<(), DatabaseError> {
        debug_assert!(!submission.id.is_empty(), "submission id must not be empty");

        let write_txn = self.begin_write()?;
        {
            let mut table = write_txn.open_table(SUBMISSIONS)?;
            let data = rmp_serde::to_vec_named(submission)?;
            table.insert(submission.id.as_str(), data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Get a submission by its id
    pub fn get_submission(&self, id: &str) -> Result<Option<Submission>, DatabaseError> {
        let read_txn = self.begin_read()?;
        let table = read_txn.open_table(SUBMISSIONS)?;

        match table.get(id)? {
            Some(data) => {
                let submission: Submission = rmp_serde::from_slice(data.value())?;
                Ok(Some(submission))
            }
            None => Ok(None),
        }
    }

    /// Get all submissions (full-collection scan for the catalogue load)
    pub fn list_submissions(&self) -> Result<Vec<Submission>, DatabaseError> {
        let read_txn = self.begin_read()?;
        let table = read_txn.open_table(SUBMISSIONS)?;

        let mut submissions = Vec::new();
        for result in table.iter()? {
            let (_, value) = result?;
            let submission: Submission = rmp_serde::from_slice(value.value())?;
            submissions.push(submission);
        }

        Ok(submissions)
    }

    // ========================================================================
    // User operations
    // ========================================================================

    /// Store a user record
    pub fn put_user(&self, user: &User) -> Result<(), DatabaseError> {
        debug_assert!(!user.id.is_empty(), "user id must not be empty");

        let write_txn = self.begin_write()?;
        {
            let mut table = write_txn.open_table(USERS)?;
            let data = rmp_serde::to_vec_named(user)?;
            table.insert(user.id.as_str(), data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Get a user by id
    pub fn get_user(&self, id: &str) -> Result<Option<User>, DatabaseError> {
        let read_txn = self.begin_read()?;
        let table = read_txn.open_table(USERS)?;

        match table.get(id)? {
            Some(data) => {
                let user: User = rmp_serde::from_slice(data.value())?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    /// Get all users (full-collection scan for the catalogue load)
    pub fn list_users(&self) -> Result<Vec<User>, DatabaseError> {
        let read_txn = self.begin_read()?;
        let table = read_txn.open_table(USERS)?;

        let mut users = Vec::new();
        for result in table.iter()? {
            let (_, value) = result?;
            let user: User = rmp_serde::from_slice(value.value())?;
            users.push(user);
        }

        Ok(users)
    }
}
