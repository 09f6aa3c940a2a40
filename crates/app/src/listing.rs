//! Shared pieces of every remote table screen: the fetch-once hook and the
//! status/empty/pager scaffolding around the screen's own table.

use dioxus::prelude::*;
use shared_types::{FetchError, FetchState, ListingConfig, ViewState};
use shared_ui::components::{
    Button, ButtonVariant, Card, CardContent, CardTone, PageFooter, PageHeader, PageTitle,
    Pagination, Skeleton,
};
use std::future::Future;
use std::rc::Rc;

use crate::routes::Route;

/// Fetch state and interaction state of one remote table screen.
///
/// The fetch runs inside a `use_resource` owned by the screen, so when the
/// screen unmounts the pending request is dropped together with its scope
/// and a late response is never written anywhere.
pub struct RemoteList<T: 'static> {
    resource: Resource<Rc<FetchState<T>>>,
    pub view: Signal<ViewState<T>>,
}

impl<T: 'static> Clone for RemoteList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for RemoteList<T> {}

/// Run `fetch` once on mount and keep a fresh [`ViewState`].
///
/// Nothing read inside the resource is reactive, so it never refetches.
pub fn use_remote_list<T, F, Fut>(fetch: F) -> RemoteList<T>
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, FetchError>> + 'static,
{
    let resource = use_resource(move || {
        let request = fetch();
        async move { Rc::new(FetchState::from_result(request.await)) }
    });
    let view = use_signal(ViewState::default);

    RemoteList { resource, view }
}

impl<T: Clone + 'static> RemoteList<T> {
    /// Shared handle to the current fetch state; `Loading` until the
    /// request completes.
    pub fn state(&self) -> Rc<FetchState<T>> {
        let current = self.resource.read();
        match &*current {
            Some(state) => state.clone(),
            None => Rc::new(FetchState::Loading),
        }
    }

    /// Snapshot of the interaction state for the listing props.
    pub fn view(&self) -> ViewState<T> {
        self.view.cloned()
    }

    pub fn set_query(&mut self, query: String) {
        self.view.write().set_query(query);
    }

    pub fn previous_page(&mut self) {
        self.view.write().previous();
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.view.write().next(total_pages);
    }

    pub fn select(&mut self, item: T) {
        self.view.write().select(item);
    }

    pub fn clear_selection(&mut self) {
        self.view.write().clear_selection();
    }
}

/// Page chrome for a table screen.
#[component]
pub fn ListingPage(title: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./listing.css") }
        div { class: "container listing-page",
            PageHeader {
                PageTitle { "{title}" }
            }
            {children}
        }
    }
}

#[component]
pub fn ListingLoading() -> Element {
    rsx! {
        Skeleton { lines: 3 }
    }
}

/// Static failure text that replaces the whole screen body.
#[component]
pub fn ListingError(message: String) -> Element {
    rsx! {
        Card { tone: CardTone::Error,
            CardContent {
                p { class: "listing-error", "{message}" }
            }
        }
    }
}

/// Table plus pager, or the configured empty-state message when the
/// filtered collection is empty and a message is configured.
#[component]
pub fn PagedListing(
    page: usize,
    total_pages: usize,
    is_empty: bool,
    listing: ListingConfig,
    on_previous: EventHandler<MouseEvent>,
    on_next: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    if is_empty {
        if let Some(message) = listing.empty_message {
            return rsx! {
                Card {
                    CardContent {
                        p { class: "listing-empty", "{message}" }
                    }
                }
            };
        }
    }

    rsx! {
        {children}
        Pagination {
            page: page,
            total_pages: total_pages,
            on_previous: on_previous,
            on_next: on_next,
        }
    }
}

/// "Go to Main Page" action; routing is left to the router.
#[component]
pub fn BackToMain() -> Element {
    rsx! {
        PageFooter {
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| {
                    navigator().push(Route::Home {});
                },
                "Go to Main Page"
            }
        }
    }
}
