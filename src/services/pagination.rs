use std::future::Future;

use crate::domain::errors::AuditResult;

/// Fetch pages 1, 2, ... until one comes back empty and return the
/// concatenation of all non-empty pages. The first error aborts.
pub async fn collect_pages<T, F, Fut>(mut fetch: F) -> AuditResult<Vec<T>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = AuditResult<Vec<T>>>,
{
    let mut items = Vec::new();
    let mut page = 1;
    loop {
        let batch = fetch(page).await?;
        if batch.is_empty() {
            return Ok(items);
        }
        items.extend(batch);
        page += 1;
    }
}
