use std::sync::Arc;

use chrono::NaiveDate;
use tokio::spawn;
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, warn};

use crate::budget::Categorizer;
use crate::models::TransactionRecord;
use crate::storage::TransactionStore;
use crate::types::UserId;

/// Owns ingestion for a single user.
///
/// Records sent to one actor are validated, categorized and stored strictly in
/// the order they were accepted.
pub struct UserActor {
    user_id: UserId,
    sender: mpsc::UnboundedSender<TransactionRecord>,
    handle: JoinHandle<()>
}

impl UserActor {
    /// Spawns the actor task. `today` fills in records that carry no date.
    pub fn new<S: TransactionStore>(user_id: UserId, storage: Arc<S>, categorizer: Arc<Categorizer>, today: NaiveDate) -> Self {
        let (sender, mut receiver) = mpsc::unbounded_channel::<TransactionRecord>();

        let handle = spawn(async move {
            while let Some(record) = receiver.recv().await {
                match record.into_transaction(&categorizer, today) {
                    Ok(transaction) => {
                        debug!("Transaction [{}]:[{}] for user [{user_id}] stored", transaction.date, transaction.category);
                        storage.insert(user_id, transaction);
                    },
                    Err(error) => {
                        //NOTE: A rejected row never stops the rest of the user's stream
                        warn!("{error}");
                    }
                }
            }
        });

        Self {
            user_id,
            sender,
            handle
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Queues a record; returns `false` if the actor task is gone.
    pub fn accept(&self, record: TransactionRecord) -> bool {
        self.sender.send(record).is_ok()
    }

    /// Closes the inbox and waits for every queued record to be stored.
    pub async fn despawn(self) -> Result<(), JoinError> {
        drop(self.sender);
        self.handle.await
    }
}
