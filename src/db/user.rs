use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, user::DBUserCreate};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel, Roles};
use sea_orm::{
    ColumnTrait, DbErr, EntityTrait, NotSet, PaginatorTrait, QueryFilter, Set, SqlErr,
    TransactionTrait,
};

impl PostgresService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: i32) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    /// Lookup by email. Absence of a match is not an error.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.database_connection)
            .await?)
    }

    /// Signup: create user. Duplicate emails fail deterministically, either
    /// through the pre-insert check or through the unique index when two
    /// registrations race.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<i32, AppError> {
        if payload.roles.is_empty() {
            return Err(AppError::Validation("at least one role is required".into()));
        }
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::AlreadyExists);
        }
        let txn = self.database_connection.begin().await?;

        let inserted = match User::insert(UserActive {
            id: NotSet,
            email: Set(payload.email),
            password_hash: Set(payload.password_hash),
            roles: Set(Roles(payload.roles)),
            created_at: Set(Utc::now()),
        })
        .exec(&txn)
        .await
        {
            Ok(inserted) => inserted,
            Err(e) => {
                return Err(match e.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(_)) => AppError::AlreadyExists,
                    _ => AppError::Db(e),
                })
            }
        };

        txn.commit().await?;
        Ok(inserted.last_insert_id)
    }
}
