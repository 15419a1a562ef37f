use rusqlite::Connection;

use crate::errors::MetroGraphError;

pub fn ensure_schema(conn: &Connection) -> Result<(), MetroGraphError> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS stations (
            id             INTEGER PRIMARY KEY,
            name           TEXT NOT NULL,
            coord_x        REAL NOT NULL,
            coord_y        REAL NOT NULL,
            line_direction INTEGER NOT NULL DEFAULT 0
        );
        CREATE TABLE IF NOT EXISTS connections (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            line_id      INTEGER NOT NULL DEFAULT 0,
            from_station INTEGER NOT NULL,
            to_station   INTEGER NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_connections_from ON connections(from_station);
        "#,
    )
    .map_err(|e| MetroGraphError::schema(e.to_string()))?;
    Ok(())
}
