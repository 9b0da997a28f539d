//! Access control: the read-only principal
//!
//! Two principals exist: the write-owning connection (whatever DATABASE_URL
//! points at, full rights) and a read-only role granted SELECT on every
//! table present when the grant runs. PostgreSQL grants do not extend to
//! tables created later, so `apply_read_grants` must be re-run after any
//! migration that adds a table; the `refresh_grants` binary wraps that.

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::error::{classify, StoreError};

pub const DEFAULT_READER_ROLE: &str = "grid_reader";

/// Role names end up interpolated into DDL, where they cannot be bound as
/// parameters, so only plain lowercase identifiers are accepted.
pub fn validate_role_name(role: &str) -> Result<(), StoreError> {
    let mut chars = role.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_lowercase() || first == '_')
                && role.len() <= 63
                && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(StoreError::DomainConstraint(format!(
            "invalid role name: {role:?}"
        )))
    }
}

/// Create the read-only role if it does not exist. Idempotent.
pub async fn ensure_read_role(db: &DatabaseConnection, role: &str) -> Result<(), StoreError> {
    validate_role_name(role)?;

    db.execute_unprepared(&format!(
        r#"
        DO $$
        BEGIN
            IF NOT EXISTS (SELECT FROM pg_roles WHERE rolname = '{role}') THEN
                CREATE ROLE {role} LOGIN;
            END IF;
        END
        $$;
        "#
    ))
    .await
    .map_err(classify)?;

    Ok(())
}

/// Grant SELECT on every table currently in the public schema to the role.
///
/// Covers exactly the tables that exist now; re-run after schema changes.
pub async fn apply_read_grants(db: &DatabaseConnection, role: &str) -> Result<(), StoreError> {
    validate_role_name(role)?;

    db.execute_unprepared(&format!("GRANT USAGE ON SCHEMA public TO {role}"))
        .await
        .map_err(classify)?;
    db.execute_unprepared(&format!(
        "GRANT SELECT ON ALL TABLES IN SCHEMA public TO {role}"
    ))
    .await
    .map_err(classify)?;

    tracing::info!("Applied read-only grants to role {}", role);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_identifiers() {
        assert!(validate_role_name("grid_reader").is_ok());
        assert!(validate_role_name("_internal").is_ok());
        assert!(validate_role_name("reader2").is_ok());
    }

    #[test]
    fn rejects_anything_quotable() {
        for role in ["", "Reader", "grid-reader", "grid reader", "r;drop", "1st"] {
            assert!(
                matches!(validate_role_name(role), Err(StoreError::DomainConstraint(_))),
                "accepted {role:?}"
            );
        }
    }
}
