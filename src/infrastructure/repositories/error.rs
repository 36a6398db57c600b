use crate::domain::errors::DomainError;

// SQLite extended result codes
const SQLITE_CONSTRAINT_NOTNULL: &str = "1299";
const SQLITE_CONSTRAINT_CHECK: &str = "275";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        sqlx::Error::Database(db_err) => {
            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    SQLITE_CONSTRAINT_NOTNULL => {
                        return DomainError::Persistence(format!(
                            "not null constraint violated: {}",
                            db_err.message()
                        ));
                    }
                    SQLITE_CONSTRAINT_CHECK => {
                        return DomainError::Persistence(format!(
                            "check constraint violated: {}",
                            db_err.message()
                        ));
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
