//! # Lazy Views
//!
//! Memoizing, single-flight view loader.
//!
//! A [`LazyView`] wraps a factory producing the view asynchronously. The
//! factory runs on first activation only; concurrent activations before it
//! completes wait on the same in-flight load instead of starting their own.
//! A failed load is not remembered, so the next activation retries.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;
use tokio::sync::OnceCell;

use super::error::ViewLoadError;

type ViewFactory<V> = Arc<dyn Fn() -> BoxFuture<'static, Result<V, ViewLoadError>> + Send + Sync>;

/// A view loaded at most once per process, on demand
pub struct LazyView<V> {
    factory: ViewFactory<V>,
    cell: Arc<OnceCell<Arc<V>>>,
}

impl<V> Clone for LazyView<V> {
    fn clone(&self) -> Self {
        Self {
            factory: Arc::clone(&self.factory),
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<V> fmt::Debug for LazyView<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyView")
            .field("loaded", &self.cell.initialized())
            .finish_non_exhaustive()
    }
}

impl<V: Send + Sync + 'static> LazyView<V> {
    pub fn new<F, Fut>(factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<V, ViewLoadError>> + Send + 'static,
    {
        Self {
            factory: Arc::new(move || factory().boxed()),
            cell: Arc::new(OnceCell::new()),
        }
    }

    /// A view that is already available; loading never runs a factory
    pub fn ready(view: V) -> Self {
        let view = Arc::new(view);
        Self {
            factory: Arc::new(|| {
                futures::future::ready(Err::<V, _>(ViewLoadError::new(
                    "ready",
                    "factory never runs",
                )))
                .boxed()
            }),
            cell: Arc::new(OnceCell::new_with(Some(view))),
        }
    }

    /// Load the view, reusing the cached instance after the first success
    ///
    /// # Errors
    ///
    /// Returns the factory's error; nothing is cached in that case.
    pub async fn load(&self) -> Result<Arc<V>, ViewLoadError> {
        self.cell
            .get_or_try_init(|| async { (self.factory)().await.map(Arc::new) })
            .await
            .map(Arc::clone)
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn counting_view(loads: Arc<AtomicUsize>) -> LazyView<String> {
        LazyView::new(move || {
            let loads = Arc::clone(&loads);
            async move {
                loads.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(20)).await;
                Ok("contact page".to_string())
            }
        })
    }

    #[tokio::test]
    async fn test_load_runs_factory_once() {
        let loads = Arc::new(AtomicUsize::new(0));
        let view = counting_view(Arc::clone(&loads));
        assert!(!view.is_loaded());

        let first = view.load().await.unwrap();
        let second = view.load().await.unwrap();

        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert!(view.is_loaded());
    }

    #[tokio::test]
    async fn test_concurrent_loads_share_one_flight() {
        let loads = Arc::new(AtomicUsize::new(0));
        let view = counting_view(Arc::clone(&loads));

        let other = view.clone();
        let (a, b, c) = tokio::join!(view.load(), view.load(), other.load());

        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&a.unwrap(), &b.unwrap()));
        assert_eq!(c.unwrap().as_str(), "contact page");
    }

    #[tokio::test]
    async fn test_failed_load_is_retried() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&attempts);
        let view = LazyView::new(move || {
            let attempt = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt == 0 {
                    Err(ViewLoadError::new("services", "chunk fetch failed"))
                } else {
                    Ok(42_u32)
                }
            }
        });

        assert!(view.load().await.is_err());
        assert!(!view.is_loaded());
        assert_eq!(*view.load().await.unwrap(), 42);
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_ready_view_never_runs_factory() {
        let view = LazyView::ready("home".to_string());
        assert!(view.is_loaded());
        assert_eq!(view.load().await.unwrap().as_str(), "home");
    }
}
