use crate::actors::UserActor;
use crate::budget::{aggregate, allocate, summarize, window_start, Categorizer, DEFAULT_SAVINGS_PERCENT, DEFAULT_WINDOW_DAYS};
use crate::engine::UserReport;
use crate::models::{Transaction, TransactionRecord};
use crate::storage::{TransactionStorage, TransactionStore};
use crate::types::{Percent, UserId};
use chrono::{NaiveDate, Utc};
use csv::{ReaderBuilder, Trim};
use futures::future::join_all;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::{spawn_blocking, JoinHandle};
use tracing::{debug, error, info};

/// Records buffered between the CSV reader and the user actors.
pub const DEFAULT_BACKPRESSURE: usize = 256;

/// Ingests transaction CSV files and answers budget requests.
pub struct BudgetEngine {
    storage: Arc<TransactionStorage>,
    categorizer: Arc<Categorizer>,
    window_days: u32,
    savings_percent: Percent,
    today: NaiveDate,
    backpressure: usize
}

impl BudgetEngine {
    /// Creates a new engine instance with the provided storage, the default
    /// keyword table and today's UTC date.
    pub fn new(storage: Arc<TransactionStorage>) -> Self {
        Self {
            storage,
            categorizer: Arc::new(Categorizer::default()),
            window_days: DEFAULT_WINDOW_DAYS,
            savings_percent: Percent::from(DEFAULT_SAVINGS_PERCENT),
            today: Utc::now().date_naive(),
            backpressure: DEFAULT_BACKPRESSURE
        }
    }

    pub fn with_categorizer(mut self, categorizer: Categorizer) -> Self {
        self.categorizer = Arc::new(categorizer);
        self
    }

    pub fn with_window_days(mut self, window_days: u32) -> Self {
        self.window_days = window_days;
        self
    }

    pub fn with_savings_percent(mut self, savings_percent: Percent) -> Self {
        self.savings_percent = savings_percent;
        self
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn with_backpressure(mut self, backpressure: usize) -> Self {
        self.backpressure = backpressure.max(1);
        self
    }

    /// Streams every row of the CSV at `path` into storage.
    ///
    /// Malformed rows and rejected records are logged and skipped; a file that
    /// cannot be opened is logged and ingests nothing.
    pub async fn run(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let (sender, receiver) = mpsc::channel::<TransactionRecord>(self.backpressure);
        let csv_handle = self.spawn_csv_reader(path.as_ref().to_path_buf(), sender);
        let processing_result = self.process_records(receiver).await;

        if let Err(error) = csv_handle.await {
            error!("CSV ingestion failed: {error}");
        }

        processing_result
    }

    /// Budget and lifetime totals for one user.
    pub fn report(&self, user_id: UserId) -> UserReport {
        let since = window_start(self.today, self.window_days);
        let recent = self.storage.query(user_id, since, NaiveDate::MAX);
        let totals = aggregate(&recent, self.today, self.window_days);

        debug!("User [{user_id}] spent [{}] across [{}] categories since {since}", totals.grand_total(), totals.len());

        let budget = allocate(&totals, self.savings_percent);

        debug!("User [{user_id}] budget allocates [{}%] over [{}] entries", budget.total_percent(), budget.breakdown.len());

        UserReport {
            user: user_id,
            summary: summarize(&self.storage.query(user_id, NaiveDate::MIN, NaiveDate::MAX)),
            budget
        }
    }

    /// Reports for every user seen so far, ordered by user.
    pub fn reports(&self) -> Vec<UserReport> {
        self.storage.users().into_iter()
            .map(|user_id| self.report(user_id))
            .collect()
    }

    pub fn transactions(&self, user_id: UserId, limit: usize) -> Vec<Transaction> {
        self.storage.list(user_id, limit)
    }

    fn spawn_csv_reader(&self, path: PathBuf, sender: mpsc::Sender<TransactionRecord>) -> JoinHandle<()> {
        spawn_blocking(move || {
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(error) => {
                    error!("Error opening CSV at path: {} | {error}", path.display());
                    return;
                }
            };

            let mut reader = ReaderBuilder::new()
                .trim(Trim::All)
                .flexible(true)
                .from_reader(BufReader::new(file));

            for result in reader.deserialize::<TransactionRecord>() {
                match result {
                    Ok(record) => {
                        if sender.blocking_send(record).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        error!("CSV deserialization error: {error}");
                    }
                }
            }
        })
    }

    async fn process_records(&self, mut receiver: mpsc::Receiver<TransactionRecord>) -> anyhow::Result<()> {
        let mut actors = HashMap::<UserId, UserActor>::new();
        let mut received = 0usize;

        //NOTE: One actor per user keeps each user's rows in file order while different users ingest in parallel
        while let Some(record) = receiver.recv().await {
            received += 1;
            let user_id = record.user_id;

            let actor = actors.entry(user_id).or_insert_with(|| {
                UserActor::new(user_id, self.storage.clone(), self.categorizer.clone(), self.today)
            });

            if !actor.accept(record) {
                error!("User actor for user [{}] could not accept record [{received}]", actor.user_id());
            }
        }

        info!("Read [{received}] records for [{}] users", actors.len());

        //NOTE: Wait for every actor to drain its queue before anyone reads storage
        let despawns = actors.into_values().map(|actor| actor.despawn());

        for result in join_all(despawns).await {
            if let Err(error) = result {
                error!("A user actor did not despawn gracefully: {error:?}");
            }
        }

        Ok(())
    }
}
