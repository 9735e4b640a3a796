use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use fanfetch as ff;

#[test]
fn test_join_from_sync() {
    let handle = ff::co::block(async { ff::co::co_spawn(async { 6 * 7 }) });
    assert_eq!(handle.join().unwrap(), 42);
}

#[tokio::test]
async fn test_co_join() {
    let handle = ff::co::co_spawn(async { "hello".to_string() });
    assert_eq!(handle.co_join().await.unwrap(), "hello");
}

#[tokio::test]
async fn test_aborted_task() {
    let handle = ff::co::co_spawn(async {
        tokio::time::sleep(Duration::from_secs(10)).await;
        1
    });
    handle.abort();
    assert_eq!(handle.co_join().await.unwrap_err().to_string(), "aborted");

    let handle = ff::co::co_spawn(async {
        tokio::time::sleep(Duration::from_secs(10)).await;
        1
    });
    handle.abort_handle().abort();
    assert_eq!(handle.co_join_maybe_aborted().await.unwrap(), None);
}

#[tokio::test]
async fn test_panicked_task() {
    let handle = ff::co::co_spawn(async {
        if true {
            panic!("oops");
        }
        1
    });
    let msg = handle.co_join().await.unwrap_err().to_string();
    assert_eq!(msg, "task panicked: oops");
}

#[tokio::test]
async fn test_is_finished() {
    let handle = ff::co::co_spawn(async { 1 });
    while !handle.is_finished() {
        tokio::task::yield_now().await;
    }
    assert_eq!(handle.co_join().await.unwrap(), 1);
}

#[tokio::test]
async fn test_pool_limits_tasks() {
    let pool = ff::co::pool(2);
    assert_eq!(pool.capacity(), 2);
    let running = Arc::new(AtomicUsize::new(0));
    let max = Arc::new(AtomicUsize::new(0));
    let handles: Vec<_> = (0..6)
        .map(|i| {
            let running = Arc::clone(&running);
            let max = Arc::clone(&max);
            pool.co_spawn(async move {
                let now = running.fetch_add(1, Ordering::SeqCst) + 1;
                max.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(10)).await;
                running.fetch_sub(1, Ordering::SeqCst);
                i
            })
        })
        .collect();
    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.co_join().await.unwrap());
    }
    assert_eq!(results, vec![0, 1, 2, 3, 4, 5]);
    assert!(max.load(Ordering::SeqCst) <= 2);
    assert_eq!(pool.available(), 2);
}

#[tokio::test]
async fn test_set_next_in_completion_order() {
    let mut set = ff::co::set();
    for (i, ms) in [(0, 60), (1, 0), (2, 30)] {
        set.co_spawn(async move {
            tokio::time::sleep(Duration::from_millis(ms)).await;
            i
        });
    }
    assert_eq!(set.len(), 3);
    let mut order = Vec::new();
    while let Some(x) = set.next().await {
        order.push(x.unwrap());
    }
    assert_eq!(order, vec![1, 2, 0]);
    assert!(set.is_empty());
}

#[tokio::test]
async fn test_set_join_all_first_error() {
    let mut set = ff::co::set();
    set.co_spawn(async { ff::Ok(1) });
    set.co_spawn(async { ff::Result::<i32>::Err(ff::fmterr!("bad")) });
    set.co_spawn(async {
        tokio::time::sleep(Duration::from_secs(10)).await;
        ff::Ok(3)
    });
    let msg = set.co_join_all().await.unwrap_err().to_string();
    assert_eq!(msg, "bad");
}
