//! Explicit unit-of-work for assignment writes.
//!
//! Every lifecycle operation runs against one `UnitOfWork`. The primary
//! write, the rollup upsert, the cost recompute, and the project list
//! cascade all share its transaction, so a failure in any step leaves no
//! trace once the unit-of-work is rolled back.
//!
//! # Usage
//!
//! ```ignore
//! use opcost_db::unit_of_work::UnitOfWork;
//!
//! let uow = UnitOfWork::begin(&db).await?;
//! let result = AssignmentRepository::create_in(&uow, input).await;
//! let assignment = uow.finish(result).await?;
//! ```

use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

/// A database transaction scoped to one business operation.
pub struct UnitOfWork {
    txn: DatabaseTransaction,
}

impl UnitOfWork {
    /// Begins a new unit-of-work.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started.
    pub async fn begin(db: &DatabaseConnection) -> Result<Self, DbErr> {
        let txn = db.begin().await?;
        Ok(Self { txn })
    }

    /// Returns the underlying transaction for executing queries.
    #[must_use]
    pub fn transaction(&self) -> &DatabaseTransaction {
        &self.txn
    }

    /// Commits the unit-of-work, persisting all changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the commit fails.
    pub async fn commit(self) -> Result<(), DbErr> {
        self.txn.commit().await
    }

    /// Rolls back the unit-of-work, discarding all changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the rollback fails.
    pub async fn rollback(self) -> Result<(), DbErr> {
        self.txn.rollback().await
    }

    /// Commits on `Ok`, rolls back on `Err`, and passes `result` through.
    ///
    /// A rollback failure is logged and the original error is returned.
    ///
    /// # Errors
    ///
    /// Returns the operation's error, or the commit error.
    pub async fn finish<T, E>(self, result: Result<T, E>) -> Result<T, E>
    where
        E: From<DbErr>,
    {
        match result {
            Ok(value) => {
                self.commit().await?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = self.rollback().await {
                    tracing::error!(error = %rollback_err, "Failed to roll back unit of work");
                }
                Err(err)
            }
        }
    }
}

/// Extension trait for `DatabaseConnection` to open a unit-of-work.
#[async_trait::async_trait]
pub trait UnitOfWorkExt {
    /// Begins a unit-of-work on this connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction cannot be started.
    async fn unit_of_work(&self) -> Result<UnitOfWork, DbErr>;
}

#[async_trait::async_trait]
impl UnitOfWorkExt for DatabaseConnection {
    async fn unit_of_work(&self) -> Result<UnitOfWork, DbErr> {
        UnitOfWork::begin(self).await
    }
}
