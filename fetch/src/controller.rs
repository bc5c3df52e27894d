//! The fetch controller: one asynchronous operation's lifecycle.
//!
//! Every invocation is stamped with a generation when it starts. A result
//! is committed only if its generation is still the newest one and the
//! controller is still alive, so a slow invocation for an old dependency set
//! can never overwrite the result of a newer one. Superseded invocations
//! are not cancelled; their network work finishes and the result is dropped.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use futures::task::LocalSpawnExt;

use crate::{FetchError, FetchState, Operation, Spawner};

type Listener<T> = Rc<dyn Fn(&FetchState<T>)>;

struct Inner<T, D> {
    state: FetchState<T>,
    deps: D,
    operation: Operation<T>,
    /// Generation of the newest invocation. Only it may commit.
    generation: u64,
    active: bool,
    listeners: Vec<Listener<T>>,
}

type Shared<T, D> = Rc<RefCell<Inner<T, D>>>;

/// Owns the fetch lifecycle for one consuming view.
///
/// The controller starts fetching as soon as it is constructed and again
/// whenever [`FetchController::set_dependencies`] sees a different
/// dependency value or a different operation. Dropping the controller, or
/// calling [`FetchController::deactivate`], suppresses every in-flight
/// result.
pub struct FetchController<T, D> {
    inner: Shared<T, D>,
    spawner: Spawner,
}

impl<T, D> FetchController<T, D>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
{
    pub fn new(deps: D, operation: Operation<T>, spawner: Spawner) -> Self {
        let inner = Rc::new(RefCell::new(Inner {
            state: FetchState::default(),
            deps,
            operation,
            generation: 0,
            active: true,
            listeners: Vec::new(),
        }));
        start(&inner, &spawner);
        Self { inner, spawner }
    }

    /// Current snapshot.
    pub fn state(&self) -> FetchState<T> {
        self.inner.borrow().state.clone()
    }

    /// Read the current snapshot without cloning it.
    pub fn with_state<R>(&self, f: impl FnOnce(&FetchState<T>) -> R) -> R {
        f(&self.inner.borrow().state)
    }

    pub fn dependencies(&self) -> D {
        self.inner.borrow().deps.clone()
    }

    pub fn is_active(&self) -> bool {
        self.inner.borrow().active
    }

    /// Replace the dependency set and the operation bound to it.
    ///
    /// Starts a new invocation when either the dependencies differ or the
    /// operation is not the same one already held. Returns whether an
    /// invocation was started.
    pub fn set_dependencies(&self, deps: D, operation: Operation<T>) -> bool {
        {
            let mut inner = self.inner.borrow_mut();
            if !inner.active {
                return false;
            }
            if inner.deps == deps && inner.operation.same_as(&operation) {
                return false;
            }
            inner.deps = deps;
            inner.operation = operation;
        }
        start(&self.inner, &self.spawner);
        true
    }

    /// Invoke the current operation again without touching the dependency
    /// set.
    pub fn refresh(&self) {
        start(&self.inner, &self.spawner);
    }

    /// A cloneable handle that refreshes this controller while it is alive.
    pub fn refresher(&self) -> Refresh {
        let inner = Rc::downgrade(&self.inner);
        let spawner = self.spawner.clone();
        Refresh {
            call: Rc::new(move || {
                if let Some(inner) = Weak::upgrade(&inner) {
                    start(&inner, &spawner);
                }
            }),
        }
    }

    /// Run `listener` after every visible state change.
    ///
    /// Listeners are called with no borrow held, so they may read from or
    /// call back into the controller.
    pub fn subscribe(&self, listener: impl Fn(&FetchState<T>) + 'static) {
        self.inner.borrow_mut().listeners.push(Rc::new(listener));
    }

    /// Tear the controller down. In-flight results are discarded, later
    /// refreshes are ignored, and listeners are released.
    pub fn deactivate(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.active = false;
        inner.generation += 1;
        inner.listeners.clear();
        tracing::trace!(generation = inner.generation, "controller deactivated");
    }
}

impl<T, D: fmt::Debug> fmt::Debug for FetchController<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("FetchController")
            .field("deps", &inner.deps)
            .field("generation", &inner.generation)
            .field("loading", &inner.state.loading)
            .field("active", &inner.active)
            .finish()
    }
}

/// Type-erased refresh callable handed out to views.
#[derive(Clone)]
pub struct Refresh {
    call: Rc<dyn Fn()>,
}

impl Refresh {
    pub fn refresh(&self) {
        (self.call)()
    }
}

impl fmt::Debug for Refresh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Refresh")
    }
}

fn start<T, D>(inner: &Shared<T, D>, spawner: &Spawner)
where
    T: Clone + 'static,
    D: 'static,
{
    let (generation, operation) = {
        let mut inner = inner.borrow_mut();
        if !inner.active {
            tracing::trace!("ignoring fetch on deactivated controller");
            return;
        }
        inner.generation += 1;
        inner.state.loading = true;
        (inner.generation, inner.operation.clone())
    };
    tracing::debug!(generation, "fetch started");
    notify(inner);

    let future = operation.invoke();
    let owner = Rc::downgrade(inner);
    let task = async move {
        let result = future.await;
        match owner.upgrade() {
            Some(inner) => commit(&inner, generation, result),
            None => {
                tracing::trace!(generation, "controller dropped, result discarded")
            }
        }
    };
    if let Err(e) = spawner.spawn_local(task) {
        commit(inner, generation, Err(FetchError::from_error(e)));
    }
}

fn commit<T, D>(
    inner: &Shared<T, D>,
    generation: u64,
    result: Result<T, FetchError>,
) where
    T: Clone + 'static,
{
    {
        let mut inner = inner.borrow_mut();
        if !inner.active || inner.generation != generation {
            tracing::debug!(
                generation,
                current = inner.generation,
                "superseded result discarded"
            );
            return;
        }
        inner.state.resolve(result);
    }
    tracing::debug!(generation, "fetch committed");
    notify(inner);
}

fn notify<T: Clone, D>(inner: &Shared<T, D>) {
    let (listeners, state) = {
        let inner = inner.borrow();
        if inner.listeners.is_empty() {
            return;
        }
        (inner.listeners.clone(), inner.state.clone())
    };
    for listener in listeners {
        listener(&state);
    }
}
