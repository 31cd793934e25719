use crate::db::database_service::DatabaseService;
use crate::types::delegate::{Attendance, Delegate, DelegationCreateRes, NewDelegate, SampleSeedRes};
use crate::types::error::AppError;
use chrono::{Duration, Utc};
use entity::delegate::{ActiveModel as DelegateActive, Column, Entity as DelegateEntity};
use entity::team_sequence::{self, Entity as TeamSequence};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};
use tracing::info;
use uuid::Uuid;

/// Hands out the next team id. Bumping the sequence row first takes a row
/// lock, so concurrent callers queue up instead of reading the same maximum.
/// The result is also kept above any team id already stored.
pub async fn allocate_team_id<C: ConnectionTrait>(conn: &C) -> Result<i32, DbErr> {
    TeamSequence::update_many()
        .col_expr(team_sequence::Column::Value, Expr::col(team_sequence::Column::Value).add(1))
        .filter(team_sequence::Column::Id.eq(team_sequence::ROW_ID))
        .exec(conn)
        .await?;

    let seq = TeamSequence::find_by_id(team_sequence::ROW_ID)
        .one(conn)
        .await?
        .ok_or_else(|| DbErr::Custom("team sequence row missing".into()))?;

    let highest = DelegateEntity::find()
        .order_by_desc(Column::TeamId)
        .one(conn)
        .await?
        .map(|d| d.team_id)
        .unwrap_or(0);

    let team_id = seq.value.max(highest + 1);
    if team_id != seq.value {
        let mut am: team_sequence::ActiveModel = seq.into();
        am.value = Set(team_id);
        am.update(conn).await?;
    }
    Ok(team_id)
}

/// Inserts one team, everyone absent, under a freshly allocated id.
async fn insert_team<C: ConnectionTrait>(conn: &C, records: Vec<NewDelegate>) -> Result<(i32, usize), DbErr> {
    let team_id = allocate_team_id(conn).await?;
    let now = Utc::now();
    let absent = Attendance::absent();

    let rows: Vec<DelegateActive> = records
        .into_iter()
        .map(|r| DelegateActive {
            id: Set(Uuid::new_v4()),
            team_id: Set(team_id),
            name: Set(r.name),
            category: Set(r.category),
            is_head: Set(r.is_head),
            day1: Set(absent.day1),
            day2: Set(absent.day2),
            day3: Set(absent.day3),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .collect();
    let inserted_count = rows.len();

    DelegateEntity::insert_many(rows).exec_without_returning(conn).await?;
    Ok((team_id, inserted_count))
}

impl DatabaseService {
    /// Stores a validated delegation under a fresh team id. Allocation and
    /// inserts share one transaction, so a failure leaves nothing behind.
    pub async fn insert_delegation(&self, records: Vec<NewDelegate>) -> Result<DelegationCreateRes, AppError> {
        if records.is_empty() {
            return Err(AppError::Validation("Delegate 1 name is required".into()));
        }
        let txn = self.database_connection.begin().await?;
        let (team_id, inserted_count) = insert_team(&txn, records).await?;
        txn.commit().await?;

        info!("created team {} with {} delegates", team_id, inserted_count);
        Ok(DelegationCreateRes { team_id, inserted_count })
    }

    /// Wipes every delegate and loads `teams` in their place, all in one
    /// transaction. Team ids still come from the sequence, so ids handed out
    /// before the wipe are not reused.
    pub async fn replace_all_delegates(&self, teams: Vec<Vec<NewDelegate>>) -> Result<SampleSeedRes, AppError> {
        let txn = self.database_connection.begin().await?;
        let removed = DelegateEntity::delete_many().exec(&txn).await?.rows_affected;

        let mut team_ids = Vec::with_capacity(teams.len());
        let mut inserted_count = 0;
        for team in teams.into_iter().filter(|t| !t.is_empty()) {
            let (team_id, count) = insert_team(&txn, team).await?;
            team_ids.push(team_id);
            inserted_count += count;
        }
        txn.commit().await?;

        info!("replaced {} delegates with {} across {} teams", removed, inserted_count, team_ids.len());
        Ok(SampleSeedRes { team_ids, inserted_count })
    }

    pub async fn get_delegate(&self, id: Uuid) -> Result<Delegate, AppError> {
        Ok(DelegateEntity::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Delegate not found".into()))?
            .into())
    }

    /// Every delegate, by team then name. Point-in-time snapshot.
    pub async fn list_delegates(&self) -> Result<Vec<Delegate>, AppError> {
        Ok(DelegateEntity::find()
            .order_by_asc(Column::TeamId)
            .order_by_asc(Column::Name)
            .all(&self.database_connection)
            .await?
            .into_iter()
            .map(Delegate::from)
            .collect())
    }

    pub async fn list_team(&self, team_id: i32) -> Result<Vec<Delegate>, AppError> {
        Ok(DelegateEntity::find()
            .filter(Column::TeamId.eq(team_id))
            .order_by_asc(Column::Name)
            .all(&self.database_connection)
            .await?
            .into_iter()
            .map(Delegate::from)
            .collect())
    }

    /// Replaces all three days at once.
    pub async fn set_attendance(&self, id: Uuid, attendance: Attendance) -> Result<Delegate, AppError> {
        let current = DelegateEntity::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Delegate not found".into()))?;

        // updated_at must move forward even when two writes land in the same tick
        let stamp = Utc::now().max(current.updated_at + Duration::microseconds(1));

        let mut am: DelegateActive = current.into();
        am.day1 = Set(attendance.day1);
        am.day2 = Set(attendance.day2);
        am.day3 = Set(attendance.day3);
        am.updated_at = Set(stamp);
        Ok(am.update(&self.database_connection).await?.into())
    }

    pub async fn delete_delegate(&self, id: Uuid) -> Result<(), AppError> {
        let res = DelegateEntity::delete_by_id(id).exec(&self.database_connection).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("Delegate not found".into()));
        }
        info!("deleted delegate {}", id);
        Ok(())
    }

    pub async fn delete_team(&self, team_id: i32) -> Result<u64, AppError> {
        if team_id < 1 {
            return Err(AppError::Validation("Invalid team ID".into()));
        }
        let res = DelegateEntity::delete_many()
            .filter(Column::TeamId.eq(team_id))
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound("Team not found".into()));
        }
        info!("deleted team {} ({} delegates)", team_id, res.rows_affected);
        Ok(res.rows_affected)
    }
}
