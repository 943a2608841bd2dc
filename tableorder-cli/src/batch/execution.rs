//! Statement execution against a live database
//!
//! Dry run is the default and has no side effects. A real run executes every
//! statement in one transaction and commits only if all of them succeed.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::error::BatchOperationError;
use super::statements::BatchOperations;

/// Outcome of an execution request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionReport {
    pub dry_run: bool,
    pub statements: Vec<String>,
    /// Statements committed (always 0 for a dry run)
    pub executed: usize,
}

impl BatchOperations {
    /// Execute statements, or just return them when `dry_run` is set
    pub async fn execute_statements(
        &self,
        statements: &[String],
        dry_run: bool,
    ) -> Result<ExecutionReport, BatchOperationError> {
        if dry_run {
            log::info!("Dry run: {} statements not executed", statements.len());
            return Ok(ExecutionReport {
                dry_run: true,
                statements: statements.to_vec(),
                executed: 0,
            });
        }

        let connection_string = self
            .connection_string()
            .ok_or(BatchOperationError::MissingConnection)?;

        let executed = execute_in_transaction(connection_string, statements).await?;

        Ok(ExecutionReport {
            dry_run: false,
            statements: statements.to_vec(),
            executed,
        })
    }
}

/// Run statements sequentially inside a single transaction
///
/// The first failure rolls the transaction back and is returned with its
/// 1-based index; the remaining statements are not attempted.
pub async fn execute_in_transaction(
    connection_string: &str,
    statements: &[String],
) -> Result<usize, BatchOperationError> {
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(connection_string)
        .await
        .map_err(BatchOperationError::Connection)?;

    let result = run_in_transaction(&pool, statements).await;
    pool.close().await;

    let executed = result?;
    log::info!("All {} statements executed successfully", executed);
    Ok(executed)
}

async fn run_in_transaction(
    pool: &PgPool,
    statements: &[String],
) -> Result<usize, BatchOperationError> {
    let mut tx = pool.begin().await.map_err(BatchOperationError::Transaction)?;

    for (i, statement) in statements.iter().enumerate() {
        let index = i + 1;
        log::info!("Executing statement {}: {}", index, statement);

        if let Err(source) = sqlx::raw_sql(statement).execute(&mut *tx).await {
            log::error!("Statement {} failed: {}", index, source);
            if let Err(err) = tx.rollback().await {
                log::error!("Rollback failed: {}", err);
            }
            return Err(BatchOperationError::Execution {
                index,
                statement: statement.clone(),
                source,
            });
        }
    }

    tx.commit().await.map_err(BatchOperationError::Transaction)?;
    Ok(statements.len())
}
