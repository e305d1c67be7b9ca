use crate::error::PreviewReadError;
use futures::future::join_all;
use std::fmt::Display;
use std::future::Future;

/// Waits for every preview read, then returns all data URLs in input order.
///
/// A single failed read fails the whole batch so previews never go out of
/// alignment with the selection.
pub async fn join_previews<I, Fut, E>(reads: I) -> Result<Vec<String>, PreviewReadError>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Result<String, E>>,
    E: Display,
{
    let outcomes = join_all(reads).await;
    let total = outcomes.len();

    let mut previews = Vec::with_capacity(total);
    let mut failures = Vec::new();
    for (index, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok(data_url) => previews.push(data_url),
            Err(e) => failures.push(format!("#{}: {}", index, e)),
        }
    }

    match failures.first() {
        None => Ok(previews),
        Some(first) => Err(PreviewReadError {
            failed: failures.len(),
            total,
            first: first.clone(),
        }),
    }
}
