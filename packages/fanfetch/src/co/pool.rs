use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::co::{Handle, co_util};

/// Create a new [`Pool`].
///
/// - If `capacity > 0`, then the pool will be created
///   with literally that number of permits (concurrency) available.
/// - If `capacity = 0`, then the pool will be created
///   with the number of logical processors on the system
///   using the `num_cpus` crate, minimum 1.
/// - if `capacity < 0`, then the pool will be created
///   with the number of logical processors on the system,
///   minus the specified amount, and minimum 1.
///
/// The capacity is capped at [`Semaphore::MAX_PERMITS`].
#[inline(always)]
pub fn pool(capacity: isize) -> Pool {
    Pool::new(pool_capacity(capacity, num_cpus::get()))
}

fn pool_capacity(capacity: isize, cpus: usize) -> usize {
    let capacity = match capacity {
        1.. => capacity.unsigned_abs(),
        c => cpus.saturating_sub(c.unsigned_abs()).max(1),
    };
    capacity.min(Semaphore::MAX_PERMITS)
}

/// A pool for limiting async tasks
///
/// The pool is not to be used as a thread pool. It is a "limiter"
/// to ensure we only fire a limited number of requests at once.
/// All tasks still run on the same runtime.
///
/// The pool can be cloned and shared. Dropping the pool will not cause the spawned
/// tasks to be either joined or canceled.
#[derive(Clone)]
pub struct Pool(Arc<PoolInner>);
struct PoolInner {
    sem: Semaphore,
    capacity: usize,
}
impl Pool {
    fn new(capacity: usize) -> Self {
        Self(Arc::new(PoolInner {
            sem: Semaphore::new(capacity),
            capacity,
        }))
    }

    /// Number of tasks the pool lets run at the same time
    pub fn capacity(&self) -> usize {
        self.0.capacity
    }

    /// Number of permits available right now
    pub fn available(&self) -> usize {
        self.0.sem.available_permits()
    }

    /// Spawn a task onto the current runtime, which will only
    /// start being executed when the pool has availability (permits)
    pub fn co_spawn<F>(&self, future: F) -> Handle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        crate::co::co_spawn(self.limit(future))
    }

    /// Create a [`Set`] where every task spawned into it is limited by this pool
    pub fn set<T: Send + 'static>(&self) -> Set<T> {
        Set {
            join_set: JoinSet::new(),
            pool: Some(self.clone()),
        }
    }

    fn limit<F>(&self, future: F) -> impl Future<Output = F::Output> + Send + 'static
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        let inner = Arc::clone(&self.0);
        async move {
            let _permit = inner.sem.acquire().await.ok();
            let result = future.await;
            drop(_permit);
            result
        }
    }
}

/// Create an unlimited [`Set`] of tasks.
///
/// Use [`Pool::set`] to limit how many tasks in the set run at once.
pub fn set<T: Send + 'static>() -> Set<T> {
    Set {
        join_set: JoinSet::new(),
        pool: None,
    }
}

/// A set of tasks that can be joined concurrently.
///
/// Tasks are spawned onto the current runtime. When the set is dropped,
/// all tasks still in the set are aborted.
pub struct Set<T> {
    join_set: JoinSet<T>,
    pool: Option<Pool>,
}

impl<T: Send + 'static> Set<T> {
    /// Spawn a task into the set. Must be called inside a runtime context
    pub fn co_spawn<F>(&mut self, future: F)
    where
        F: Future<Output = T> + Send + 'static,
    {
        match &self.pool {
            Some(pool) => self.join_set.spawn(pool.limit(future)),
            None => self.join_set.spawn(future),
        };
    }

    /// Number of tasks not joined yet
    pub fn len(&self) -> usize {
        self.join_set.len()
    }

    /// If all tasks are joined
    pub fn is_empty(&self) -> bool {
        self.join_set.is_empty()
    }

    /// Wait for the next task to finish, and return it's result,
    /// or `None` if the set is empty, meaning all tasks are joined.
    ///
    /// Tasks finish in whatever order they complete, not in the order they were spawned.
    pub async fn next(&mut self) -> Option<crate::Result<T>> {
        let result = self.join_set.join_next().await?;
        match result {
            Err(join_error) => match co_util::check_join_error(join_error) {
                Err(e) => Some(Err(e)),
                Ok(_) => Some(Err(crate::fmterr!("aborted"))),
            },
            Ok(x) => Some(Ok(x)),
        }
    }

    /// Abort every task still in the set
    pub fn abort_all(&mut self) {
        self.join_set.abort_all();
    }
}

impl<T: Send + 'static> Set<crate::Result<T>> {
    /// Wait for every task in the set, in completion order.
    ///
    /// The first task that fails (returns an error, panics or is aborted) ends the join:
    /// the rest of the tasks are aborted and the error is returned.
    pub async fn co_join_all(mut self) -> crate::Result<Vec<T>> {
        let mut results = Vec::with_capacity(self.len());
        while let Some(result) = self.next().await {
            match result.and_then(|x| x) {
                Ok(x) => results.push(x),
                Err(e) => {
                    let remaining = self.len();
                    self.abort_all();
                    if remaining > 0 {
                        crate::debug!("aborting {remaining} remaining task(s)");
                    }
                    return Err(e);
                }
            }
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_from_cpus() {
        assert_eq!(pool_capacity(3, 8), 3);
        assert_eq!(pool_capacity(0, 8), 8);
        assert_eq!(pool_capacity(-2, 8), 6);
        assert_eq!(pool_capacity(-20, 8), 1);
        assert_eq!(pool_capacity(0, 0), 1);
        assert_eq!(pool_capacity(isize::MAX, 8), Semaphore::MAX_PERMITS);
        assert_eq!(pool_capacity(isize::MIN, 8), 1);
    }

    #[test]
    fn huge_capacity_does_not_panic() {
        let pool = pool(isize::MAX);
        assert_eq!(pool.capacity(), Semaphore::MAX_PERMITS);
        assert_eq!(pool.available(), Semaphore::MAX_PERMITS);
    }
}
