mod common;

use futures::executor::LocalPool;

use common::{Gate, page_of};
use fetch::{
    FetchError, PageQuery, Paginated, PaginationState, Paginator,
    SortDirection, spawner,
};

fn sorted(page: u32, column: &str, direction: SortDirection) -> PageQuery {
    PageQuery {
        page,
        sort_by: column.to_string(),
        sort_direction: direction,
    }
}

#[test]
fn starts_on_first_page_unsorted() {
    let pool = LocalPool::new();
    let gate = Gate::<Paginated<&str>>::new();
    let paginator = Paginator::new(gate.page_operation(), spawner(pool.spawner()));

    assert_eq!(gate.queries(), vec![PageQuery::default()]);
    let snapshot = paginator.snapshot();
    assert_eq!(snapshot.page, 1);
    assert_eq!(snapshot.sort_by, "");
    assert_eq!(snapshot.sort_direction, SortDirection::Asc);
    assert!(snapshot.loading);
}

#[test]
fn defaults_substituted_before_first_resolution() {
    let pool = LocalPool::new();
    let gate = Gate::<Paginated<&str>>::new();
    let paginator = Paginator::new(gate.page_operation(), spawner(pool.spawner()));

    assert!(paginator.items().is_empty());
    assert_eq!(
        paginator.pagination(),
        PaginationState {
            page: 1,
            per_page: 100,
            total: 0,
            total_pages: 1,
        }
    );
}

#[test]
fn failure_falls_back_to_defaults() {
    let mut pool = LocalPool::new();
    let gate = Gate::<Paginated<&str>>::new();
    let paginator = Paginator::new(gate.page_operation(), spawner(pool.spawner()));
    gate.resolve(0, Ok(page_of(vec!["casa"], 1, 1, 1)));
    pool.run_until_stalled();

    paginator.refresh();
    gate.resolve(1, Err(FetchError::new("Failed to fetch words")));
    pool.run_until_stalled();

    assert!(paginator.items().is_empty());
    assert_eq!(paginator.pagination(), PaginationState::default());
    assert_eq!(
        paginator.error(),
        Some(FetchError::new("Failed to fetch words"))
    );
    assert!(!paginator.loading());
}

#[test]
fn sort_toggle_law() {
    let pool = LocalPool::new();
    let gate = Gate::<Paginated<&str>>::new();
    let paginator = Paginator::new(gate.page_operation(), spawner(pool.spawner()));

    paginator.handle_sort("english");
    assert_eq!(paginator.sort_by(), "english");
    assert_eq!(paginator.sort_direction(), SortDirection::Asc);

    paginator.handle_sort("english");
    assert_eq!(paginator.sort_direction(), SortDirection::Desc);

    paginator.handle_sort("english");
    assert_eq!(paginator.sort_direction(), SortDirection::Asc);

    paginator.handle_sort("english");
    paginator.handle_sort("kimbundu");
    assert_eq!(paginator.sort_by(), "kimbundu");
    assert_eq!(paginator.sort_direction(), SortDirection::Asc);

    assert_eq!(
        gate.queries(),
        vec![
            PageQuery::default(),
            sorted(1, "english", SortDirection::Asc),
            sorted(1, "english", SortDirection::Desc),
            sorted(1, "english", SortDirection::Asc),
            sorted(1, "english", SortDirection::Desc),
            sorted(1, "kimbundu", SortDirection::Asc),
        ]
    );
}

#[test]
fn sorting_keeps_the_current_page() {
    let pool = LocalPool::new();
    let gate = Gate::<Paginated<&str>>::new();
    let paginator = Paginator::new(gate.page_operation(), spawner(pool.spawner()));

    paginator.handle_page_change(3);
    paginator.handle_sort("portuguese");

    assert_eq!(paginator.page(), 3);
    assert_eq!(gate.last_query(), sorted(3, "portuguese", SortDirection::Asc));
}

#[test]
fn page_change_shows_new_page_after_loading() {
    let mut pool = LocalPool::new();
    let gate = Gate::<Paginated<&str>>::new();
    let paginator = Paginator::new(gate.page_operation(), spawner(pool.spawner()));
    gate.resolve(0, Ok(page_of(vec!["casa", "mesa"], 1, 250, 3)));
    pool.run_until_stalled();

    paginator.handle_page_change(2);
    let during = paginator.snapshot();
    assert!(during.loading);
    assert_eq!(during.page, 2);
    assert_eq!(during.items, vec!["casa", "mesa"]);

    gate.resolve(1, Ok(page_of(vec!["livro"], 2, 250, 3)));
    pool.run_until_stalled();

    let after = paginator.snapshot();
    assert!(!after.loading);
    assert_eq!(after.items, vec!["livro"]);
    assert_eq!(after.pagination.page, 2);
    assert_eq!(after.pagination.total, 250);
    assert_eq!(after.pagination.total_pages, 3);
}

#[test]
fn late_page_does_not_replace_newer_page() {
    let mut pool = LocalPool::new();
    let gate = Gate::<Paginated<&str>>::new();
    let paginator = Paginator::new(gate.page_operation(), spawner(pool.spawner()));

    paginator.handle_page_change(2);
    gate.resolve(1, Ok(page_of(vec!["page two"], 2, 150, 2)));
    pool.run_until_stalled();
    gate.resolve(0, Ok(page_of(vec!["page one"], 1, 150, 2)));
    pool.run_until_stalled();

    assert_eq!(paginator.items(), vec!["page two"]);
    assert_eq!(paginator.pagination().page, 2);
}

#[test]
fn same_page_does_not_refetch() {
    let pool = LocalPool::new();
    let gate = Gate::<Paginated<&str>>::new();
    let paginator = Paginator::new(gate.page_operation(), spawner(pool.spawner()));

    paginator.handle_page_change(1);
    assert_eq!(gate.calls(), 1);

    paginator.handle_page_change(4);
    paginator.handle_page_change(4);
    assert_eq!(gate.calls(), 2);
}

#[test]
fn refresh_keeps_page_and_sort() {
    let pool = LocalPool::new();
    let gate = Gate::<Paginated<&str>>::new();
    let paginator = Paginator::with_query(
        gate.page_operation(),
        sorted(2, "name", SortDirection::Desc),
        spawner(pool.spawner()),
    );

    paginator.refresh();
    assert_eq!(
        gate.queries(),
        vec![
            sorted(2, "name", SortDirection::Desc),
            sorted(2, "name", SortDirection::Desc),
        ]
    );
    assert_eq!(paginator.query(), sorted(2, "name", SortDirection::Desc));
}

#[test]
fn out_of_range_page_is_forwarded() {
    let mut pool = LocalPool::new();
    let gate = Gate::<Paginated<&str>>::new();
    let paginator = Paginator::new(gate.page_operation(), spawner(pool.spawner()));
    gate.resolve(0, Ok(page_of(vec!["casa"], 1, 1, 1)));
    pool.run_until_stalled();

    paginator.handle_page_change(99);
    assert_eq!(gate.last_query().page, 99);

    gate.resolve(1, Ok(page_of(vec![], 99, 1, 1)));
    pool.run_until_stalled();
    assert!(paginator.items().is_empty());
    assert_eq!(paginator.page(), 99);
}

#[test]
fn empty_table_reports_one_page() {
    let mut pool = LocalPool::new();
    let gate = Gate::<Paginated<&str>>::new();
    let paginator = Paginator::new(gate.page_operation(), spawner(pool.spawner()));
    gate.resolve(0, Ok(page_of(vec![], 1, 0, 0)));
    pool.run_until_stalled();

    let pagination = paginator.pagination();
    assert_eq!(pagination.total, 0);
    assert_eq!(pagination.total_pages, 1);
    assert!(!pagination.has_next());
}

#[test]
fn listener_may_change_page() {
    let mut pool = LocalPool::new();
    let gate = Gate::<Paginated<&str>>::new();
    let paginator = std::rc::Rc::new(Paginator::new(
        gate.page_operation(),
        spawner(pool.spawner()),
    ));
    {
        let weak = std::rc::Rc::downgrade(&paginator);
        paginator.subscribe(move |state| {
            // Jump to the last page once the first one has loaded.
            if let Some(page) = &state.data
                && page.pagination.page == 1
                && let Some(paginator) = weak.upgrade()
            {
                paginator.handle_page_change(page.pagination.total_pages);
            }
        });
    }

    gate.resolve(0, Ok(page_of(vec!["a"], 1, 201, 3)));
    pool.run_until_stalled();

    assert_eq!(paginator.page(), 3);
    assert_eq!(gate.last_query().page, 3);
    assert!(paginator.loading());
}
