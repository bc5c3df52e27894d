use std::fmt;
use std::future::Future;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use payloads::{PageQuery, Paginated};

use crate::FetchError;

pub type OperationFuture<T> = LocalBoxFuture<'static, Result<T, FetchError>>;

/// A zero-argument asynchronous operation the controller can invoke any
/// number of times.
///
/// Clones share one identity. The controller compares identities with
/// [`Operation::same_as`] to decide whether a new operation counts as a
/// dependency change.
pub struct Operation<T> {
    call: Rc<dyn Fn() -> OperationFuture<T>>,
}

impl<T> Clone for Operation<T> {
    fn clone(&self) -> Self {
        Self {
            call: self.call.clone(),
        }
    }
}

impl<T> fmt::Debug for Operation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("id", &Rc::as_ptr(&self.call).cast::<()>())
            .finish()
    }
}

impl<T: 'static> Operation<T> {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<T, FetchError>> + 'static,
    {
        Self {
            call: Rc::new(move || f().boxed_local()),
        }
    }

    pub fn invoke(&self) -> OperationFuture<T> {
        (self.call)()
    }

    pub fn same_as(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.call, &other.call)
    }
}

/// An operation parameterized by page and sort order.
pub struct PageOperation<T> {
    call: Rc<dyn Fn(PageQuery) -> OperationFuture<Paginated<T>>>,
}

impl<T> Clone for PageOperation<T> {
    fn clone(&self) -> Self {
        Self {
            call: self.call.clone(),
        }
    }
}

impl<T: 'static> PageOperation<T> {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(PageQuery) -> Fut + 'static,
        Fut: Future<Output = Result<Paginated<T>, FetchError>> + 'static,
    {
        Self {
            call: Rc::new(move |query| f(query).boxed_local()),
        }
    }

    pub fn invoke(&self, query: PageQuery) -> OperationFuture<Paginated<T>> {
        (self.call)(query)
    }

    /// Fix the query, producing a fresh zero-argument operation.
    pub fn bind(&self, query: PageQuery) -> Operation<Paginated<T>> {
        let call = self.call.clone();
        Operation::new(move || call(query.clone()))
    }
}

/// Binding of a page operation memoized on the query it was bound to.
///
/// Asking again with an equal query hands back the same operation, so the
/// controller sees no dependency change.
pub(crate) struct MemoizedBinding<T> {
    source: PageOperation<T>,
    cached: Option<(PageQuery, Operation<Paginated<T>>)>,
}

impl<T: 'static> MemoizedBinding<T> {
    pub(crate) fn new(source: PageOperation<T>) -> Self {
        Self {
            source,
            cached: None,
        }
    }

    pub(crate) fn get(&mut self, query: &PageQuery) -> Operation<Paginated<T>> {
        if let Some((key, operation)) = &self.cached
            && key == query
        {
            return operation.clone();
        }
        let operation = self.source.bind(query.clone());
        self.cached = Some((query.clone(), operation.clone()));
        operation
    }
}
