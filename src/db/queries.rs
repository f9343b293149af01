use crate::errors::AppResult;
use crate::store::LedgerRow;
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<LedgerRow> {
    Ok(LedgerRow {
        name: row.get("name")?,
        timestamp: row.get("timestamp")?,
        duration: row.get("duration")?,
    })
}

pub fn insert_row(conn: &Connection, row: &LedgerRow) -> AppResult<()> {
    conn.execute(
        "INSERT INTO ledger (name, timestamp, duration) VALUES (?1, ?2, ?3)",
        params![row.name, row.timestamp, row.duration],
    )?;
    Ok(())
}

/// Every row in insertion order, header included.
pub fn load_rows(conn: &Connection) -> AppResult<Vec<LedgerRow>> {
    let mut stmt =
        conn.prepare_cached("SELECT name, timestamp, duration FROM ledger ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_rows(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM ledger", [], |row| row.get(0))
}

/// Insert the header row when the table holds nothing at all.
pub fn ensure_header(conn: &Connection) -> AppResult<()> {
    if count_rows(conn)? == 0 {
        insert_row(conn, &LedgerRow::header())?;
    }
    Ok(())
}

/// Delete every row and write the header back, atomically.
pub fn reset_ledger(conn: &mut Connection) -> AppResult<()> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM ledger", [])?;
    tx.execute("DELETE FROM sqlite_sequence WHERE name = 'ledger'", [])?;
    insert_row(&tx, &LedgerRow::header())?;
    tx.commit()?;
    Ok(())
}
