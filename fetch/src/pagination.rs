use std::cell::RefCell;

use payloads::{PageQuery, Paginated, PaginationState, SortDirection};

use crate::operation::MemoizedBinding;
use crate::{
    FetchController, FetchError, FetchState, PageOperation, Refresh, Spawner,
};

/// Page and sort state layered over a [`FetchController`].
///
/// The query (page, sort column, direction) is the controller's dependency
/// set. Changing any part of it through the setters binds the page operation
/// to the new query and refetches. Setting a value equal to the current one
/// does not.
pub struct Paginator<T> {
    query: RefCell<PageQuery>,
    binding: RefCell<MemoizedBinding<T>>,
    controller: FetchController<Paginated<T>, PageQuery>,
}

/// Everything a paginated view renders from, with defaults filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSnapshot<T> {
    pub items: Vec<T>,
    pub pagination: PaginationState,
    pub loading: bool,
    pub error: Option<FetchError>,
    pub page: u32,
    pub sort_by: String,
    pub sort_direction: SortDirection,
}

impl<T: Clone + 'static> Paginator<T> {
    /// Start at page 1, unsorted.
    pub fn new(fetch_page: PageOperation<T>, spawner: Spawner) -> Self {
        Self::with_query(fetch_page, PageQuery::default(), spawner)
    }

    pub fn with_query(
        fetch_page: PageOperation<T>,
        initial: PageQuery,
        spawner: Spawner,
    ) -> Self {
        let mut binding = MemoizedBinding::new(fetch_page);
        let operation = binding.get(&initial);
        let controller =
            FetchController::new(initial.clone(), operation, spawner);
        Self {
            query: RefCell::new(initial),
            binding: RefCell::new(binding),
            controller,
        }
    }

    /// Go to `page`. No bounds check against `total_pages`: the backend's
    /// answer for an out-of-range page is what gets shown.
    pub fn handle_page_change(&self, page: u32) {
        self.query.borrow_mut().page = page;
        self.sync();
    }

    /// Sort by `column`, flipping the direction when it is already the sort
    /// column and starting ascending otherwise.
    ///
    /// The page is kept as is, even when the column changes.
    pub fn handle_sort(&self, column: &str) {
        {
            let mut query = self.query.borrow_mut();
            if query.sort_by == column {
                query.sort_direction = query.sort_direction.toggled();
            } else {
                query.sort_by = column.to_string();
                query.sort_direction = SortDirection::Asc;
            }
        }
        self.sync();
    }

    fn sync(&self) {
        let query = self.query.borrow().clone();
        let operation = self.binding.borrow_mut().get(&query);
        if self.controller.set_dependencies(query.clone(), operation) {
            tracing::debug!(
                page = query.page,
                sort_by = %query.sort_by,
                direction = %query.sort_direction,
                "page query changed"
            );
        }
    }

    pub fn items(&self) -> Vec<T> {
        self.controller.with_state(|state| {
            state
                .data
                .as_ref()
                .map(|page| page.items.clone())
                .unwrap_or_default()
        })
    }

    /// Pagination of the last loaded page, or the default shape when nothing
    /// is loaded.
    pub fn pagination(&self) -> PaginationState {
        self.controller.with_state(pagination_of)
    }

    pub fn loading(&self) -> bool {
        self.controller.with_state(|state| state.loading)
    }

    pub fn error(&self) -> Option<FetchError> {
        self.controller.with_state(|state| state.error.clone())
    }

    pub fn page(&self) -> u32 {
        self.query.borrow().page
    }

    pub fn sort_by(&self) -> String {
        self.query.borrow().sort_by.clone()
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.query.borrow().sort_direction
    }

    pub fn query(&self) -> PageQuery {
        self.query.borrow().clone()
    }

    pub fn state(&self) -> FetchState<Paginated<T>> {
        self.controller.state()
    }

    pub fn snapshot(&self) -> PageSnapshot<T> {
        let query = self.query();
        self.controller.with_state(|state| PageSnapshot {
            items: state
                .data
                .as_ref()
                .map(|page| page.items.clone())
                .unwrap_or_default(),
            pagination: pagination_of(state),
            loading: state.loading,
            error: state.error.clone(),
            page: query.page,
            sort_by: query.sort_by,
            sort_direction: query.sort_direction,
        })
    }

    pub fn refresh(&self) {
        self.controller.refresh();
    }

    pub fn refresher(&self) -> Refresh {
        self.controller.refresher()
    }

    pub fn subscribe(
        &self,
        listener: impl Fn(&FetchState<Paginated<T>>) + 'static,
    ) {
        self.controller.subscribe(listener);
    }

    pub fn deactivate(&self) {
        self.controller.deactivate();
    }
}

fn pagination_of<T>(state: &FetchState<Paginated<T>>) -> PaginationState {
    state
        .data
        .as_ref()
        .map(|page| page.pagination.normalized())
        .unwrap_or_default()
}
