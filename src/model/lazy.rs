use std::sync::Arc;

use parking_lot::RwLock;

/// A value computed on first access and immutable afterwards.
///
/// Reads take a shared lock just long enough to clone the handle. The first
/// access takes the exclusive lock and re-checks before computing, so
/// concurrent first reads compute the value once. No lock is held once
/// [`Lazy::get`] returns.
#[derive(Debug)]
pub(crate) struct Lazy<T> {
    cell: RwLock<Option<Arc<T>>>,
}

impl<T> Lazy<T> {
    pub(crate) fn new() -> Self {
        Self {
            cell: RwLock::new(None),
        }
    }

    /// Returns the value, computing it with `init` if absent.
    ///
    /// `init` runs under this cell's exclusive lock, so it must not access
    /// this same `Lazy`. It may access other cells.
    pub(crate) fn get(&self, init: impl FnOnce() -> T) -> Arc<T> {
        if let Some(value) = self.cell.read().as_ref() {
            return Arc::clone(value);
        }

        let mut cell = self.cell.write();
        Arc::clone(cell.get_or_insert_with(|| Arc::new(init())))
    }

    /// Returns whether the value has been computed.
    pub(crate) fn is_computed(&self) -> bool {
        self.cell.read().is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        thread,
    };

    use super::*;

    #[test]
    fn test_computes_once() {
        let calls = AtomicUsize::new(0);
        let lazy = Lazy::<Vec<f64>>::new();
        assert!(!lazy.is_computed());

        for _ in 0..3 {
            let v = lazy.get(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                vec![1., 2.]
            });
            assert_eq!(*v, vec![1., 2.]);
        }

        assert!(lazy.is_computed());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_concurrent_first_reads_compute_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let lazy = Arc::new(Lazy::<usize>::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let calls = Arc::clone(&calls);
                let lazy = Arc::clone(&lazy);
                thread::spawn(move || {
                    *lazy.get(|| {
                        calls.fetch_add(1, Ordering::SeqCst);
                        42
                    })
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 42);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_nested_cells_initialise_each_other() {
        let inner = Lazy::<usize>::new();
        let outer = Lazy::<usize>::new();

        let v = outer.get(|| *inner.get(|| 20) + *inner.get(|| unreachable!()) + 2);
        assert_eq!(*v, 42);
        assert_eq!(*inner.get(|| 0), 20);
    }

    #[test]
    fn test_handle_outlives_lock() {
        let lazy = Lazy::<usize>::new();
        let first = lazy.get(|| 7);

        assert!(lazy.is_computed());
        assert_eq!(*lazy.get(|| 0), *first);
    }
}
