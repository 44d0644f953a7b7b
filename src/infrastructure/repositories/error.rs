// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_USER_ROLE: &str = "users_role_chk";
const CNT_USER_AFFILIATION: &str = "users_affiliation_chk";
const CNT_USER_PUBLISHER: &str = "users_publisher_id_fkey";
const CNT_PUBLISHER_NAME: &str = "publishers_name_key";
const CNT_PUBLISHER_NAME_CHECK: &str = "publishers_name_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
                    CNT_PUBLISHER_NAME => {
                        DomainError::Conflict("publisher with this name already exists".into())
                    }
                    CNT_USER_ROLE => DomainError::Validation("unknown role".into()),
                    CNT_USER_AFFILIATION => DomainError::Validation(
                        "only journalists can be affiliated with a publisher".into(),
                    ),
                    CNT_USER_PUBLISHER => DomainError::Validation("publisher does not exist".into()),
                    CNT_PUBLISHER_NAME_CHECK => {
                        DomainError::Validation("publisher name is invalid".into())
                    }
                    c if c.ends_with("_author_id_fkey") => {
                        DomainError::NotFound("author not found".into())
                    }
                    c if c.ends_with("_publisher_id_fkey") => {
                        DomainError::Validation("publisher does not exist".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
