use std::future::Future;

use fetch::{FetchController, FetchError, Operation};
use yew::prelude::*;

use crate::spawner;

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<FetchError>,
    pub refetch: Callback<()>,
}

impl<T> FetchHookReturn<T> {
    /// Returns true if this is the initial load (data not yet fetched,
    /// currently loading, and no error).
    pub fn is_initial_loading(&self) -> bool {
        self.is_loading && self.data.is_none() && self.error.is_none()
    }

    /// Render based on fetch state with contextual loading/error messages.
    ///
    /// - No data + loading: "Loading {context}..."
    /// - No data + error: "Error loading {context}: ..."
    /// - Has data: `render_fn(data, is_loading)`, so a refetch in progress
    ///   keeps showing the previous data
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// word_hook.render("word", |word, is_loading| html! {
    ///     <WordCard word={word.clone()} refreshing={is_loading} />
    /// })
    /// ```
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool) -> Html,
    {
        match (&self.data, &self.error) {
            (Some(data), _) => render_fn(data, self.is_loading),
            (None, _) if self.is_loading => html! {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {format!("Loading {context}...")}
                    </p>
                </div>
            },
            (None, Some(error)) => html! {
                <div class="p-4 rounded-md bg-red-50 \
                           dark:bg-red-900/20 border \
                           border-red-200 dark:border-red-800">
                    <p class="text-sm text-red-700 dark:text-red-400">
                        {format!("Error loading {context}: {error}")}
                    </p>
                </div>
            },
            (None, None) => html! {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {format!("No {context} found")}
                    </p>
                </div>
            },
        }
    }
}

/// Fetch hook over an operation built by `make_operation`.
///
/// The operation is rebuilt only when `deps` changes, and the controller
/// refetches only then. Results of fetches started for earlier `deps`, or
/// arriving after the component unmounted, are dropped.
#[hook]
pub fn use_operation<T, D, M>(deps: D, make_operation: M) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    M: FnOnce() -> Operation<T>,
{
    let update = use_force_update();
    let operation = use_memo(deps.clone(), move |_| make_operation());

    let controller = {
        let deps = deps.clone();
        let operation = (*operation).clone();
        use_memo((), move |_| {
            let controller = FetchController::new(deps, operation, spawner());
            controller.subscribe(move |_| update.force_update());
            controller
        })
    };

    {
        let controller = controller.clone();
        use_effect_with((), move |_| move || controller.deactivate());
    }

    {
        let controller = controller.clone();
        let operation = (*operation).clone();
        use_effect_with(deps, move |deps| {
            controller.set_dependencies(deps.clone(), operation);
        });
    }

    let state = controller.state();
    let refresh = controller.refresher();
    FetchHookReturn {
        data: state.data,
        is_loading: state.loading,
        error: state.error,
        refetch: Callback::from(move |_| refresh.refresh()),
    }
}

/// Generic fetch hook composer.
///
/// Fetches on mount and whenever `deps` changes. The fetch function
/// captures its inputs from the closure; `deps` decides when a new closure
/// counts as a new request.
///
/// # Example
///
/// ```rust,ignore
/// #[hook]
/// pub fn use_word_detail(word_id: WordId) -> FetchHookReturn<WordDetail> {
///     use_fetch(word_id, move || async move {
///         get_api_client()
///             .get_word(&word_id)
///             .await
///             .map_err(FetchError::from)
///     })
/// }
/// ```
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch_fn: F) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    use_operation(deps, move || Operation::new(fetch_fn))
}
