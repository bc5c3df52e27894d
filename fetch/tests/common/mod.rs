#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use futures::channel::oneshot;
use payloads::{PageQuery, Paginated, PaginationState};

use fetch::{FetchError, Operation, PageOperation};

type Pending<T> = Rc<RefCell<Vec<Option<oneshot::Sender<Result<T, FetchError>>>>>>;

/// Operations whose invocations stay pending until the test resolves them,
/// in any order.
pub struct Gate<T> {
    pending: Pending<T>,
    queries: Rc<RefCell<Vec<PageQuery>>>,
}

impl<T: 'static> Gate<T> {
    pub fn new() -> Self {
        Self {
            pending: Rc::default(),
            queries: Rc::default(),
        }
    }

    /// A fresh operation. Every invocation of it registers one call.
    pub fn operation(&self) -> Operation<T> {
        let pending = self.pending.clone();
        Operation::new(move || register(&pending))
    }

    /// Number of invocations so far.
    pub fn calls(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Complete invocation `call` (0-based) with `result`.
    pub fn resolve(&self, call: usize, result: Result<T, FetchError>) {
        let sender = self.pending.borrow_mut()[call]
            .take()
            .expect("call already resolved");
        // The receiver is gone when the invocation's task was dropped.
        let _ = sender.send(result);
    }
}

impl<U: 'static> Gate<Paginated<U>> {
    /// A page operation that records the query of every invocation.
    pub fn page_operation(&self) -> PageOperation<U> {
        let pending = self.pending.clone();
        let queries = self.queries.clone();
        PageOperation::new(move |query| {
            queries.borrow_mut().push(query);
            register(&pending)
        })
    }

    pub fn queries(&self) -> Vec<PageQuery> {
        self.queries.borrow().clone()
    }

    pub fn last_query(&self) -> PageQuery {
        self.queries.borrow().last().cloned().expect("no invocation")
    }
}

fn register<T: 'static>(
    pending: &Pending<T>,
) -> impl Future<Output = Result<T, FetchError>> + use<T> {
    let (tx, rx) = oneshot::channel();
    pending.borrow_mut().push(Some(tx));
    async move {
        rx.await
            .unwrap_or_else(|_| Err(FetchError::new("gate dropped")))
    }
}

pub fn page_of<U>(
    items: Vec<U>,
    page: u32,
    total: u64,
    total_pages: u32,
) -> Paginated<U> {
    Paginated {
        items,
        pagination: PaginationState {
            page,
            per_page: 100,
            total,
            total_pages,
        },
    }
}

/// Wait until `done` holds, yielding to the local tasks in between.
pub async fn until(done: impl Fn() -> bool) {
    tokio::time::timeout(Duration::from_secs(10), async {
        while !done() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("condition not reached in time");
}
