use crate::db::database_service::DatabaseService;
use crate::types::access::AllowedUserEntry;
use crate::types::error::AppError;
use crate::utils::access::normalize_email;
use chrono::Utc;
use entity::allowed_user::{ActiveModel as AllowedActive, Entity as AllowedUser};
use sea_orm::{EntityTrait, PaginatorTrait, Set, TransactionTrait};
use std::collections::BTreeMap;

impl DatabaseService {
    pub async fn is_allowed(&self, email: &str) -> Result<bool, AppError> {
        Ok(AllowedUser::find_by_id(normalize_email(email))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn add_allowed_user(&self, entry: AllowedUserEntry) -> Result<String, AppError> {
        let email = normalize_email(&entry.email);
        if email.is_empty() {
            return Err(AppError::Validation("Email is required".into()));
        }
        if self.is_allowed(&email).await? {
            return Err(AppError::AlreadyExists);
        }
        let now = Utc::now();
        AllowedUser::insert(AllowedActive {
            email: Set(email.clone()),
            name: Set(entry.name),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec_without_returning(&self.database_connection)
        .await?;
        Ok(email)
    }

    /// Replaces the whole allow-list. Emails are normalized and duplicates
    /// collapse onto the last entry given.
    pub async fn seed_allowed_users(&self, entries: Vec<AllowedUserEntry>) -> Result<Vec<String>, AppError> {
        let mut unique: BTreeMap<String, Option<String>> = BTreeMap::new();
        for e in entries {
            let email = normalize_email(&e.email);
            if email.is_empty() {
                return Err(AppError::Validation("Email is required".into()));
            }
            unique.insert(email, e.name);
        }

        let now = Utc::now();
        let emails: Vec<String> = unique.keys().cloned().collect();
        let txn = self.database_connection.begin().await?;
        AllowedUser::delete_many().exec(&txn).await?;
        if !unique.is_empty() {
            AllowedUser::insert_many(unique.into_iter().map(|(email, name)| AllowedActive {
                email: Set(email),
                name: Set(name),
                created_at: Set(now),
                updated_at: Set(now),
            }))
            .exec_without_returning(&txn)
            .await?;
        }
        txn.commit().await?;
        Ok(emails)
    }
}
