use crate::db::queries::ensure_header;
use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, Result};

const NAME_INDEX_MIGRATION: &str = "20250301_0001_ledger_name_index";

/// Ensure that the `audit` table exists.
fn ensure_audit_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS audit (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `ledger` table exists.
fn ledger_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='ledger'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `ledger` table. Row order is `id` order; the header is row 1.
fn create_ledger_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS ledger (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT NOT NULL,
            timestamp  TEXT NOT NULL,
            duration   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM audit
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn migrate_add_name_index(conn: &Connection) -> Result<()> {
    if migration_applied(conn, NAME_INDEX_MIGRATION)? {
        return Ok(());
    }

    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_ledger_name ON ledger(name);")?;

    conn.execute(
        "INSERT INTO audit (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added name index to ledger')",
        [NAME_INDEX_MIGRATION],
    )?;

    log::info!("Migration applied: {}", NAME_INDEX_MIGRATION);
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_audit_table(conn)?;

    if !ledger_table_exists(conn)? {
        create_ledger_table(conn)?;
        log::info!("Created ledger table");
    }

    ensure_header(conn)?;
    migrate_add_name_index(conn)?;

    Ok(())
}
