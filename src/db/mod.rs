//! Pooled MySQL Access
//!
//! This module owns the connection pool and exposes the three statement
//! shapes the query catalog needs: select-returning-rows,
//! insert-returning-id, and update-returning-affected-count.
//!
//! # Resource Model
//! Every helper acquires one pooled connection, runs exactly one statement,
//! and returns the connection to the pool before resolving. No statement
//! spans multiple acquisitions and no caller holds a connection across an
//! interactive prompt.
//!
//! # Parameter Binding
//! All parameters are bound positionally through the driver. User-supplied
//! strings are never interpolated into SQL text.

use mysql_async::prelude::*;
use mysql_async::{Opts, OptsBuilder, Params, Pool, PoolConstraints, PoolOpts};

use crate::config::Settings;
use crate::error::{Result, RosterError};

/// Handle to the pooled database connection
///
/// Cheap to clone; all clones share the same pool. Passed explicitly to
/// every query catalog call.
#[derive(Debug, Clone)]
pub struct Db {
    pool: Pool,
}

impl Db {
    /// Build a connection pool from resolved settings
    ///
    /// No connection is opened here; the pool connects lazily on first use.
    pub fn connect(settings: &Settings) -> Result<Self> {
        let constraints = PoolConstraints::new(1, settings.pool_size).ok_or_else(|| {
            RosterError::invalid_input(format!(
                "Invalid pool size: {} (must be at least 1)",
                settings.pool_size
            ))
        })?;

        let opts: Opts = OptsBuilder::default()
            .ip_or_hostname(settings.host.clone())
            .tcp_port(settings.port)
            .user(Some(settings.user.clone()))
            .pass(Some(settings.password.clone()))
            .db_name(Some(settings.database.clone()))
            .pool_opts(PoolOpts::default().with_constraints(constraints))
            .into();

        Ok(Self { pool: Pool::new(opts) })
    }

    /// Verify connectivity by querying the server version
    ///
    /// Used once at startup so a misconfigured connection fails before the
    /// menu is ever shown.
    pub async fn verify(&self) -> Result<()> {
        let mut conn = self.pool.get_conn().await.map_err(|e| {
            RosterError::connection_failed(format!("Failed to connect to MySQL: {e}"))
        })?;

        let version: Option<String> = conn
            .query_first("SELECT VERSION()")
            .await
            .map_err(|e| {
                RosterError::connection_failed(format!("Failed to query MySQL version: {e}"))
            })?;

        match version {
            Some(version) => {
                log::debug!("connected to MySQL {version}");
                Ok(())
            }
            None => Err(RosterError::connection_failed("No version returned")),
        }
    }

    /// Execute a select and map each row into `T`
    pub async fn fetch<T, P>(&self, stmt: &str, params: P) -> Result<Vec<T>>
    where
        T: FromRow + Send + 'static,
        P: Into<Params> + Send,
    {
        log::debug!("fetch: {stmt}");
        let mut conn = self.acquire().await?;

        conn.exec(stmt, params)
            .await
            .map_err(|e| RosterError::query_failed(format!("Failed to execute query: {e}")))
    }

    /// Execute an insert and return the new row id
    pub async fn insert<P>(&self, stmt: &str, params: P) -> Result<u64>
    where
        P: Into<Params> + Send,
    {
        log::debug!("insert: {stmt}");
        let mut conn = self.acquire().await?;

        conn.exec_drop(stmt, params)
            .await
            .map_err(|e| RosterError::query_failed(format!("Failed to execute insert: {e}")))?;

        conn.last_insert_id()
            .ok_or_else(|| RosterError::query_failed("Insert returned no row id"))
    }

    /// Execute an update and return the affected-row count
    ///
    /// Zero is a normal return value (the target id did not exist), never
    /// an error.
    pub async fn update<P>(&self, stmt: &str, params: P) -> Result<u64>
    where
        P: Into<Params> + Send,
    {
        log::debug!("update: {stmt}");
        let mut conn = self.acquire().await?;

        conn.exec_drop(stmt, params)
            .await
            .map_err(|e| RosterError::query_failed(format!("Failed to execute update: {e}")))?;

        Ok(conn.affected_rows())
    }

    /// Disconnect the pool, waiting for in-flight connections to close
    pub async fn disconnect(self) -> Result<()> {
        self.pool
            .disconnect()
            .await
            .map_err(|e| RosterError::connection_failed(format!("Failed to disconnect: {e}")))
    }

    async fn acquire(&self) -> Result<mysql_async::Conn> {
        self.pool.get_conn().await.map_err(|e| {
            RosterError::connection_failed(format!("Failed to acquire connection: {e}"))
        })
    }
}
