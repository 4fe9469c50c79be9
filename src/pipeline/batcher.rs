//! Fixed-size partitioning of unprocessed items

use crate::domain::models::{AgendaItem, Batch};
use crate::error::{AppError, Result};

pub const DEFAULT_BATCH_SIZE: usize = 5;

/// Split `items` into consecutive batches of `size`
///
/// Yields `ceil(len / size)` batches; only the last may be shorter.
pub fn partition(items: Vec<AgendaItem>, size: usize) -> Result<Vec<Batch>> {
    if size == 0 {
        return Err(AppError::Config("batch size must be at least 1".to_string()));
    }

    Ok(items.chunks(size).map(|chunk| chunk.to_vec()).collect())
}
