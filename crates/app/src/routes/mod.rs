pub mod classrooms;
pub mod home;
pub mod not_found;
pub mod teachers;

use dioxus::prelude::*;

use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/classrooms")]
    ClassroomList {},
    #[route("/teachers")]
    TeacherList {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn Home() -> Element {
    home::HomePage()
}

#[component]
fn ClassroomList() -> Element {
    classrooms::list::ClassroomListPage()
}

#[component]
fn TeacherList() -> Element {
    teachers::list::TeacherListPage()
}
