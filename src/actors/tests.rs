use super::UserActor;
use crate::budget::Categorizer;
use crate::models::TransactionRecord;
use crate::storage::{TransactionStorage, TransactionStore, DEFAULT_LIST_LIMIT};
use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;

fn today() -> Result<NaiveDate> {
    Ok("2025-03-31".parse::<NaiveDate>()?)
}

fn create_record(user_id: u32, description: &str, amount: &str, kind: &str) -> Result<TransactionRecord> {
    Ok(TransactionRecord {
        user_id,
        date: None,
        description: Some(description.to_string()),
        amount: Some(Decimal::from_str(amount)?),
        category: None,
        kind: Some(kind.to_string())
    })
}

#[tokio::test]
async fn test_actor_isolation_and_storage_persistence() -> Result<()> {
    let storage = Arc::new(TransactionStorage::new());
    let categorizer = Arc::new(Categorizer::default());

    let actor_user_1 = UserActor::new(1, storage.clone(), categorizer.clone(), today()?);
    let actor_user_2 = UserActor::new(2, storage.clone(), categorizer.clone(), today()?);

    assert_eq!(actor_user_1.user_id(), 1);

    assert!(actor_user_1.accept(create_record(1, "Grocery haul", "100.0", "expense")?));
    assert!(actor_user_2.accept(create_record(2, "Salary", "200.0", "income")?));
    assert!(actor_user_1.accept(create_record(1, "Taxi", "50.0", "expense")?));

    actor_user_1.despawn().await?;
    actor_user_2.despawn().await?;

    let user_1 = storage.list(1, DEFAULT_LIST_LIMIT);
    let user_2 = storage.list(2, DEFAULT_LIST_LIMIT);

    assert_eq!(user_1.len(), 2);
    assert_eq!(user_1[0].category, "Travel");
    assert_eq!(user_1[1].category, "Food");
    assert_eq!(user_2.len(), 1);
    assert_eq!(user_2[0].category, "Income");
    assert_eq!(user_2[0].date, today()?);

    Ok(())
}

#[tokio::test]
async fn test_actor_maintains_resilience_to_invalid_records() -> Result<()> {
    let storage = Arc::new(TransactionStorage::new());
    let actor = UserActor::new(1, storage.clone(), Arc::new(Categorizer::default()), today()?);

    // Valid -> Invalid (Unknown type) -> Invalid (Negative amount) -> Valid
    actor.accept(create_record(1, "Netflix", "10.0", "expense")?);
    actor.accept(create_record(1, "Transfer", "999.0", "transfer")?);
    actor.accept(create_record(1, "Refund", "-20.0", "expense")?);
    actor.accept(create_record(1, "Movie night", "20.0", "expense")?);

    actor.despawn().await?;

    let stored = storage.list(1, DEFAULT_LIST_LIMIT);

    assert_eq!(stored.len(), 2);
    assert!(stored.iter().all(|transaction| transaction.category == "Entertainment"));

    Ok(())
}
