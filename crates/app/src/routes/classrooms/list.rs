use dioxus::prelude::*;
use shared_types::{
    derive_page, AppConfig, Classroom, FetchState, ListingConfig, Student, ViewState,
};
use shared_ui::components::{
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, Modal,
    SearchBar,
};
use std::rc::Rc;

use crate::listing::{
    use_remote_list, BackToMain, ListingError, ListingLoading, ListingPage, PagedListing,
};

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch classroom data.";
pub const SEARCH_PLACEHOLDER: &str = "Search by classroom name or teacher name";

#[component]
pub fn ClassroomListPage() -> Element {
    let config = use_context::<AppConfig>();
    let listing = config.listing.clone();
    let mut list = use_remote_list(move || {
        let config = config.clone();
        async move { client::api::fetch_classrooms(&config).await }
    });

    rsx! {
        ListingPage { title: "Classrooms",
            ClassroomListing {
                state: list.state(),
                view: list.view(),
                listing: listing,
                on_search: move |q: String| list.set_query(q),
                on_previous: move |_| list.previous_page(),
                on_next: move |total: usize| list.next_page(total),
                on_select: move |c: Classroom| list.select(c),
                on_close: move |_| list.clear_selection(),
            }
        }
    }
}

/// Screen body for a given fetch state: skeleton while loading, the static
/// failure text on error, otherwise search, table, pager and the students
/// modal.
#[component]
fn ClassroomListing(
    state: Rc<FetchState<Classroom>>,
    view: ViewState<Classroom>,
    listing: ListingConfig,
    on_search: EventHandler<String>,
    on_previous: EventHandler<MouseEvent>,
    on_next: EventHandler<usize>,
    on_select: EventHandler<Classroom>,
    on_close: EventHandler<()>,
) -> Element {
    let classrooms = match &*state {
        FetchState::Loading => return rsx! { ListingLoading {} },
        FetchState::Failed(_) => {
            return rsx! { ListingError { message: FETCH_FAILED_MESSAGE } }
        }
        FetchState::Ready(classrooms) => classrooms,
    };
    let page = derive_page(classrooms, &view, listing.page_size);
    let total_pages = page.total_pages;

    rsx! {
        SearchBar {
            query: view.query.clone(),
            placeholder: SEARCH_PLACEHOLDER,
            on_search: on_search,
        }
        PagedListing {
            page: page.page,
            total_pages: total_pages,
            is_empty: page.is_empty(),
            listing: listing.clone(),
            on_previous: on_previous,
            on_next: move |_| on_next.call(total_pages),
            {classroom_table(&page.rows, on_select)}
        }
        StudentsDialog {
            classroom: view.selected.clone(),
            on_close: on_close,
        }
        BackToMain {}
    }
}

fn classroom_table(classrooms: &[&Classroom], on_select: EventHandler<Classroom>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Classroom Name" }
                DataTableColumn { "Teacher" }
                DataTableColumn { "Number of Students" }
            }
            DataTableBody {
                for classroom in classrooms.iter() {
                    ClassroomRow {
                        key: "{classroom.id}",
                        classroom: (*classroom).clone(),
                        on_select: on_select,
                    }
                }
            }
        }
    }
}

#[component]
fn ClassroomRow(classroom: Classroom, on_select: EventHandler<Classroom>) -> Element {
    let name = classroom.name.clone();
    let teacher = classroom.teacher_display().to_string();
    let student_count = classroom.students.len();

    rsx! {
        DataTableRow {
            onclick: move |_| on_select.call(classroom.clone()),
            DataTableCell { "{name}" }
            DataTableCell { "{teacher}" }
            DataTableCell { "{student_count}" }
        }
    }
}

/// Students of the selected classroom. Renders nothing when `classroom`
/// is `None`.
#[component]
fn StudentsDialog(
    #[props(default)] classroom: Option<Classroom>,
    on_close: EventHandler<()>,
) -> Element {
    let Some(classroom) = classroom else {
        return rsx! {};
    };
    let title = format!("Students in {}", classroom.name);

    rsx! {
        Modal { title: title, on_close: on_close,
            StudentList { students: classroom.students }
        }
    }
}

/// Students by full name, in enrollment order.
#[component]
fn StudentList(students: Vec<Student>) -> Element {
    rsx! {
        ul { class: "student-list",
            for student in students {
                li { key: "{student.id}", "{student.full_name}" }
            }
        }
    }
}
