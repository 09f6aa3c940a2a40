use pretty_assertions::assert_eq;
use shared_types::{derive_page, filter, Classroom, Teacher, ViewState};

use crate::common::*;

async fn fetch_rooms() -> Vec<Classroom> {
    let api = spawn_mock_api().await;
    client::api::fetch_list(&api.url("/api/classroom"))
        .await
        .unwrap()
}

#[tokio::test]
async fn third_page_of_twenty_five_rooms() {
    let rooms = fetch_rooms().await;
    let mut view: ViewState<Classroom> = ViewState::default();

    view.next(3);
    view.next(3);
    let page = derive_page(&rooms, &view, 10);
    assert_eq!(page.page, 3);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.rows.len(), 5);
    assert_eq!(page.rows[0].name, "Room 21");

    // Next at the last page is a no-op.
    view.next(page.total_pages);
    assert_eq!(derive_page(&rooms, &view, 10).page, 3);
}

#[tokio::test]
async fn search_by_teacher_skips_rooms_without_teacher() {
    let rooms = fetch_rooms().await;

    let hits = filter(&rooms, "SMITH");

    // Rooms 1, 4, 7, ... 25 are taught by Smith.
    assert_eq!(hits.len(), 9);
    assert!(hits.iter().all(|r| r.teacher.is_some()));
    let ids: Vec<i64> = hits.iter().map(|r| r.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[tokio::test]
async fn query_change_returns_to_first_page() {
    let rooms = fetch_rooms().await;
    let mut view: ViewState<Classroom> = ViewState::default();
    view.next(3);
    view.next(3);

    view.set_query("garcia");
    let page = derive_page(&rooms, &view, 10);

    assert_eq!(page.page, 1);
    assert_eq!(page.filtered_len, 8);
    assert_eq!(page.total_pages, 1);
}

#[tokio::test]
async fn selecting_a_room_exposes_its_students_in_order() {
    let rooms = fetch_rooms().await;
    let mut view: ViewState<Classroom> = ViewState::default();
    view.next(3);

    let page = derive_page(&rooms, &view, 10);
    let picked = page.rows[2].clone();
    view.select(picked);

    let names: Vec<String> = view
        .selected
        .as_ref()
        .unwrap()
        .students
        .iter()
        .map(|s| s.full_name.clone())
        .collect();
    assert_eq!(names, vec!["Student 13-A", "Student 13-B"]);

    view.set_query("room 2");
    view.clear_selection();
    assert!(view.selected.is_none());
    assert_eq!(view.query, "room 2");
}

#[tokio::test]
async fn teacher_search_matches_name_surname_or_full_name() {
    let api = spawn_mock_api().await;
    let teachers: Vec<Teacher> = client::api::fetch_list(&api.url("/api/teacher"))
        .await
        .unwrap();

    let by_surname: Vec<i64> = filter(&teachers, "horvat").iter().map(|t| t.id).collect();
    assert_eq!(by_surname, vec![2]);

    // "an" appears in Ana, Ivan and Marko Anic.
    let by_fragment: Vec<i64> = filter(&teachers, "an").iter().map(|t| t.id).collect();
    assert_eq!(by_fragment, vec![1, 2, 3]);

    let by_full: Vec<i64> = filter(&teachers, "ana kovac").iter().map(|t| t.id).collect();
    assert_eq!(by_full, vec![1]);
}
