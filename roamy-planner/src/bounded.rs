use std::future::Future;
use std::time::Duration;
use roamy_core::{StoreError, StoreResult};

/// Upper bound applied to every store call made while planning.
#[derive(Debug, Clone, Copy)]
pub struct StoreDeadline {
    limit: Option<Duration>,
}

impl StoreDeadline {
    /// `0` disables the bound.
    pub fn from_millis(ms: u64) -> Self {
        Self {
            limit: (ms > 0).then(|| Duration::from_millis(ms)),
        }
    }

    pub async fn run<T, F>(&self, call: F) -> StoreResult<T>
    where
        F: Future<Output = StoreResult<T>>,
    {
        match self.limit {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| StoreError::Timeout(limit.as_millis() as u64))?,
            None => call.await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_slow_call_times_out() {
        let deadline = StoreDeadline::from_millis(20);
        let result: StoreResult<u32> = deadline
            .run(async {
                tokio::time::sleep(Duration::from_millis(500)).await;
                Ok(1)
            })
            .await;
        assert!(matches!(result, Err(StoreError::Timeout(20))));
    }

    #[tokio::test]
    async fn test_zero_disables_the_bound() {
        let deadline = StoreDeadline::from_millis(0);
        let result = deadline
            .run(async {
                tokio::time::sleep(Duration::from_millis(30)).await;
                Ok::<_, StoreError>(7)
            })
            .await;
        assert_eq!(result.unwrap(), 7);
    }
}
