use fetch::{
    FetchError, PageOperation, PageQuery, PaginationState, Paginator,
    SortDirection,
};
use yew::prelude::*;

use crate::spawner;

/// Everything a paginated table needs.
pub struct PaginationHookReturn<T> {
    pub items: Vec<T>,
    pub pagination: PaginationState,
    pub is_loading: bool,
    pub error: Option<FetchError>,
    pub page: u32,
    pub sort_by: String,
    pub sort_direction: SortDirection,
    pub on_page_change: Callback<u32>,
    /// Emit the column name of a clicked header.
    pub on_sort: Callback<String>,
    pub refetch: Callback<()>,
}

/// Paginated, sortable fetch hook.
///
/// `make_page_operation` runs again only when `deps` changes (e.g. the
/// group whose words are listed), which starts over from `initial`.
#[hook]
pub fn use_pagination<T, D, M>(
    deps: D,
    initial: PageQuery,
    make_page_operation: M,
) -> PaginationHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    M: FnOnce() -> PageOperation<T>,
{
    let update = use_force_update();
    let paginator = use_memo(deps.clone(), move |_| {
        let paginator =
            Paginator::with_query(make_page_operation(), initial, spawner());
        paginator.subscribe(move |_| update.force_update());
        paginator
    });

    // Tear down the paginator of the previous deps, and on unmount.
    {
        let paginator = paginator.clone();
        use_effect_with(deps, move |_| move || paginator.deactivate());
    }

    let on_page_change = {
        let paginator = paginator.clone();
        Callback::from(move |page: u32| paginator.handle_page_change(page))
    };
    let on_sort = {
        let paginator = paginator.clone();
        Callback::from(move |column: String| paginator.handle_sort(&column))
    };
    let refetch = {
        let refresh = paginator.refresher();
        Callback::from(move |_| refresh.refresh())
    };

    let snapshot = paginator.snapshot();
    PaginationHookReturn {
        items: snapshot.items,
        pagination: snapshot.pagination,
        is_loading: snapshot.loading,
        error: snapshot.error,
        page: snapshot.page,
        sort_by: snapshot.sort_by,
        sort_direction: snapshot.sort_direction,
        on_page_change,
        on_sort,
        refetch,
    }
}
