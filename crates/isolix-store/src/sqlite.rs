//! SQLite-backed store.

use std::path::Path;

use isolix_common::id::epoch_millis;
use isolix_common::{
    ColorTag, IsolationKey, Panel, PanelId, StoreError, Workspace, WorkspaceId,
};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::{info, warn};

use crate::store::WorkspaceStore;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn sql_err(e: rusqlite::Error) -> StoreError {
    StoreError::Sqlite(e.to_string())
}

fn panel_from_row(row: &Row<'_>) -> rusqlite::Result<Panel> {
    let color: String = row.get("color")?;
    let position: i64 = row.get("position")?;
    Ok(Panel {
        id: PanelId::new(row.get::<_, String>("id")?),
        title: row.get("title")?,
        url: row.get("url")?,
        color: ColorTag::parse(&color).unwrap_or_default(),
        isolation_key: IsolationKey::new(row.get::<_, String>("partition_id")?),
        position: position.max(0) as u32,
    })
}

fn require_changed(changed: usize, what: &str, id: &str) -> Result<(), StoreError> {
    if changed == 0 {
        return Err(StoreError::NotFound(format!("{what} {id}")));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// SqliteStore
// ---------------------------------------------------------------------------

/// Workspaces, panels, and settings in one SQLite file.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database at `path`, creating parent directories.
    pub fn open_at(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::Open(format!("failed to create {}: {e}", parent.display()))
            })?;
        }

        let conn = Connection::open(path)
            .map_err(|e| StoreError::Open(format!("{}: {e}", path.display())))?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(sql_err)?;
        conn.pragma_update(None, "foreign_keys", "ON")
            .map_err(sql_err)?;

        let store = Self { conn };
        store.init_schema()?;
        info!(path = %path.display(), "store opened");
        Ok(store)
    }

    /// Opens an in-memory database (for tests).
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|e| StoreError::Open(e.to_string()))?;
        conn.pragma_update(None, "foreign_keys", "ON")
            .map_err(sql_err)?;

        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Creates all tables if they do not already exist.
    fn init_schema(&self) -> Result<(), StoreError> {
        self.conn
            .execute_batch(
                "
                CREATE TABLE IF NOT EXISTS workspaces (
                    id TEXT PRIMARY KEY,
                    name TEXT NOT NULL,
                    is_active INTEGER NOT NULL DEFAULT 0,
                    created_at INTEGER NOT NULL
                );

                CREATE TABLE IF NOT EXISTS panels (
                    id TEXT PRIMARY KEY,
                    workspace_id TEXT NOT NULL
                        REFERENCES workspaces(id) ON DELETE CASCADE,
                    title TEXT NOT NULL,
                    url TEXT NOT NULL,
                    color TEXT NOT NULL,
                    partition_id TEXT NOT NULL,
                    position INTEGER NOT NULL
                );

                CREATE TABLE IF NOT EXISTS settings (
                    key TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                );

                CREATE INDEX IF NOT EXISTS idx_panels_workspace
                    ON panels(workspace_id, position);
                ",
            )
            .map_err(sql_err)
    }

    fn load_workspace(&self, id: String, name: String) -> Result<Workspace, StoreError> {
        let id = WorkspaceId::new(id);
        let panels = self.list_panels(&id)?;
        Ok(Workspace { id, name, panels })
    }
}

impl WorkspaceStore for SqliteStore {
    fn list_workspaces(&self) -> Result<Vec<Workspace>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM workspaces ORDER BY created_at ASC, rowid ASC")
            .map_err(sql_err)?;
        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))
            .map_err(sql_err)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(sql_err)?;

        rows.into_iter()
            .map(|(id, name)| self.load_workspace(id, name))
            .collect()
    }

    fn active_workspace(&self) -> Result<Option<Workspace>, StoreError> {
        let row = self
            .conn
            .query_row(
                "SELECT id, name FROM workspaces WHERE is_active = 1 LIMIT 1",
                [],
                |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)),
            )
            .optional()
            .map_err(sql_err)?;

        row.map(|(id, name)| self.load_workspace(id, name))
            .transpose()
    }

    fn list_panels(&self, workspace_id: &WorkspaceId) -> Result<Vec<Panel>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, title, url, color, partition_id, position
                 FROM panels WHERE workspace_id = ?1 ORDER BY position ASC",
            )
            .map_err(sql_err)?;
        let panels = stmt
            .query_map(params![workspace_id.as_str()], panel_from_row)
            .map_err(sql_err)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(sql_err)?;
        Ok(panels)
    }

    fn create_workspace(&mut self, id: &WorkspaceId, name: &str) -> Result<(), StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::Validation("workspace name is required".into()));
        }
        let tx = self.conn.transaction().map_err(sql_err)?;
        tx.execute("UPDATE workspaces SET is_active = 0", [])
            .map_err(sql_err)?;
        tx.execute(
            "INSERT INTO workspaces (id, name, is_active, created_at) VALUES (?1, ?2, 1, ?3)",
            params![id.as_str(), name, epoch_millis()],
        )
        .map_err(sql_err)?;
        tx.commit().map_err(sql_err)
    }

    fn rename_workspace(&mut self, id: &WorkspaceId, name: &str) -> Result<(), StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::Validation("workspace name is required".into()));
        }
        let changed = self
            .conn
            .execute(
                "UPDATE workspaces SET name = ?1 WHERE id = ?2",
                params![name, id.as_str()],
            )
            .map_err(sql_err)?;
        require_changed(changed, "workspace", id.as_str())
    }

    fn delete_workspace(&mut self, id: &WorkspaceId) -> Result<(), StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM workspaces", [], |row| row.get(0))
            .map_err(sql_err)?;
        if count <= 1 {
            return Err(StoreError::LastWorkspace);
        }
        // Panels go with the workspace through ON DELETE CASCADE.
        let changed = self
            .conn
            .execute("DELETE FROM workspaces WHERE id = ?1", params![id.as_str()])
            .map_err(sql_err)?;
        require_changed(changed, "workspace", id.as_str())
    }

    fn set_active_workspace(&mut self, id: &WorkspaceId) -> Result<(), StoreError> {
        let tx = self.conn.transaction().map_err(sql_err)?;
        tx.execute("UPDATE workspaces SET is_active = 0", [])
            .map_err(sql_err)?;
        let changed = tx
            .execute(
                "UPDATE workspaces SET is_active = 1 WHERE id = ?1",
                params![id.as_str()],
            )
            .map_err(sql_err)?;
        require_changed(changed, "workspace", id.as_str())?;
        tx.commit().map_err(sql_err)
    }

    fn create_panel(
        &mut self,
        workspace_id: &WorkspaceId,
        panel: &Panel,
    ) -> Result<(), StoreError> {
        if panel.title.trim().is_empty() {
            return Err(StoreError::Validation("panel title is required".into()));
        }
        self.conn
            .execute(
                "INSERT INTO panels (id, workspace_id, title, url, color, partition_id, position)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    panel.id.as_str(),
                    workspace_id.as_str(),
                    panel.title,
                    panel.url,
                    panel.color.class(),
                    panel.isolation_key.as_str(),
                    panel.position as i64,
                ],
            )
            .map_err(sql_err)?;
        Ok(())
    }

    fn update_panel(&mut self, id: &PanelId, title: &str, url: &str) -> Result<(), StoreError> {
        let changed = self
            .conn
            .execute(
                "UPDATE panels SET title = ?1, url = ?2 WHERE id = ?3",
                params![title, url, id.as_str()],
            )
            .map_err(sql_err)?;
        require_changed(changed, "panel", id.as_str())
    }

    fn delete_panel(&mut self, id: &PanelId) -> Result<(), StoreError> {
        let changed = self
            .conn
            .execute("DELETE FROM panels WHERE id = ?1", params![id.as_str()])
            .map_err(sql_err)?;
        require_changed(changed, "panel", id.as_str())
    }

    fn update_panel_positions(&mut self, updates: &[(PanelId, u32)]) -> Result<(), StoreError> {
        let tx = self.conn.transaction().map_err(sql_err)?;
        {
            let mut stmt = tx
                .prepare("UPDATE panels SET position = ?1 WHERE id = ?2")
                .map_err(sql_err)?;
            for (id, position) in updates {
                let changed = stmt
                    .execute(params![*position as i64, id.as_str()])
                    .map_err(sql_err)?;
                if changed == 0 {
                    // Dropping the transaction rolls back earlier rows.
                    warn!(panel_id = %id, "position update for unknown panel");
                    return Err(StoreError::NotFound(format!("panel {id}")));
                }
            }
        }
        tx.commit().map_err(sql_err)
    }

    fn get_setting(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(sql_err)
    }

    fn set_setting(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn
            .execute(
                "INSERT INTO settings (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .map_err(sql_err)?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "sqlite"
    }
}
