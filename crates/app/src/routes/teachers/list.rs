use dioxus::prelude::*;
use shared_types::{derive_page, AppConfig, FetchState, ListingConfig, Teacher, ViewState};
use shared_ui::components::{
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow,
    SearchBar,
};
use std::rc::Rc;

use crate::listing::{
    use_remote_list, BackToMain, ListingError, ListingLoading, ListingPage, PagedListing,
};

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch teacher data.";
pub const SEARCH_PLACEHOLDER: &str = "Search by teacher name or surname";

#[component]
pub fn TeacherListPage() -> Element {
    let config = use_context::<AppConfig>();
    let listing = config.listing.clone();
    let mut list = use_remote_list(move || {
        let config = config.clone();
        async move { client::api::fetch_teachers(&config).await }
    });

    rsx! {
        ListingPage { title: "Teachers",
            TeacherListing {
                state: list.state(),
                view: list.view(),
                listing: listing,
                on_search: move |q: String| list.set_query(q),
                on_previous: move |_| list.previous_page(),
                on_next: move |total: usize| list.next_page(total),
            }
        }
    }
}

#[component]
fn TeacherListing(
    state: Rc<FetchState<Teacher>>,
    view: ViewState<Teacher>,
    listing: ListingConfig,
    on_search: EventHandler<String>,
    on_previous: EventHandler<MouseEvent>,
    on_next: EventHandler<usize>,
) -> Element {
    let teachers = match &*state {
        FetchState::Loading => return rsx! { ListingLoading {} },
        FetchState::Failed(_) => {
            return rsx! { ListingError { message: FETCH_FAILED_MESSAGE } }
        }
        FetchState::Ready(teachers) => teachers,
    };
    let visible = derive_page(teachers, &view, listing.page_size);
    let total_pages = visible.total_pages;

    rsx! {
        SearchBar {
            query: view.query.clone(),
            placeholder: SEARCH_PLACEHOLDER,
            on_search: on_search,
        }
        PagedListing {
            page: visible.page,
            total_pages: total_pages,
            is_empty: visible.is_empty(),
            listing: listing.clone(),
            on_previous: on_previous,
            on_next: move |_| on_next.call(total_pages),
            {teacher_table(&visible.rows)}
        }
        BackToMain {}
    }
}

fn teacher_table(teachers: &[&Teacher]) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "ID" }
                DataTableColumn { "Name" }
                DataTableColumn { "Surname" }
            }
            DataTableBody {
                for teacher in teachers.iter() {
                    DataTableRow { key: "{teacher.id}",
                        DataTableCell { "{teacher.id}" }
                        DataTableCell { "{teacher.name}" }
                        DataTableCell { "{teacher.surname}" }
                    }
                }
            }
        }
    }
}
