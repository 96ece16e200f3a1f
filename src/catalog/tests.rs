// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use super::*;

use crate::model::show;

const TTL: Duration = Duration::from_secs(5);

fn failure() -> RequestFailure {
    RequestFailure::Status(500)
}

fn details(id: i64, genres: &[&str]) -> ShowDetails {
    ShowDetails {
        id,
        title: format!("Show {id}"),
        kind: "Scripted".into(),
        poster_url: String::new(),
        average_rating: Some(7.5),
        premiere_year: "2013".into(),
        genres: genres.iter().map(|g| g.to_string()).collect(),
        summary: "No summary available.".into(),
    }
}

fn entry(id: i64) -> WatchlistEntry {
    WatchlistEntry {
        id,
        title: format!("Show {id}"),
        poster_path: String::new(),
        rating: 6.0,
    }
}

fn token_of(task: Option<AppTask>) -> u64 {
    match task {
        Some(AppTask::LoadResults { token, .. }) => token,
        other => panic!("expected a results request, got {:?}", other),
    }
}

#[test]
fn initial_load_requests_first_discover_page() {
    let watchlist = Watchlist::in_memory();
    let mut catalog = Catalog::new(TTL);

    let task = catalog.load_results(&watchlist);

    assert_eq!(
        task,
        Some(AppTask::LoadResults {
            token: 1,
            request: ResultsRequest::Discover {
                page_index: 0,
                genre: None,
            },
        })
    );
    assert!(catalog.state.is_loading);
    assert_eq!(catalog.status, "Fetching shows...");
}

#[test]
fn genre_filter_and_page_travel_with_discover_request() {
    let watchlist = Watchlist::in_memory();
    let mut catalog = Catalog::new(TTL);
    catalog.submit_search(
        SearchForm {
            genre: "Drama".into(),
            ..SearchForm::default()
        },
        &watchlist,
    );
    catalog.state.total_pages = REMOTE_TOTAL_PAGES;

    match catalog.next_page(&watchlist) {
        Some(AppTask::LoadResults {
            request: ResultsRequest::Discover { page_index, genre },
            ..
        }) => {
            assert_eq!(page_index, 1);
            assert_eq!(genre.as_deref(), Some("Drama"));
        }
        other => panic!("unexpected task {:?}", other),
    }
}

#[test]
fn search_submission_issues_search_request() {
    let watchlist = Watchlist::in_memory();
    let mut catalog = Catalog::new(TTL);

    let task = catalog.submit_search(
        SearchForm {
            query: " girls ".into(),
            ..SearchForm::default()
        },
        &watchlist,
    );

    assert_eq!(catalog.state.mode, Mode::Search);
    assert_eq!(catalog.state.current_page, 1);
    match task {
        Some(AppTask::LoadResults {
            request: ResultsRequest::Search { query },
            ..
        }) => assert_eq!(query, "girls"),
        other => panic!("unexpected task {:?}", other),
    }
}

#[test]
fn results_replace_grid_and_fix_page_count() {
    let watchlist = Watchlist::in_memory();
    let mut catalog = Catalog::new(TTL);
    let token = token_of(catalog.load_results(&watchlist));

    let applied = catalog.apply_results(
        token,
        Ok(vec![show(1, "Under the Dome", &["Drama"]), show(2, "Arrow", &["Action"])]),
        Instant::now(),
    );

    assert!(applied);
    assert!(!catalog.state.is_loading);
    assert_eq!(catalog.state.total_pages, REMOTE_TOTAL_PAGES);
    assert_eq!(catalog.shows.len(), 2);
    assert_eq!(catalog.status, "2 results");
}

#[test]
fn stale_results_are_discarded() {
    let watchlist = Watchlist::in_memory();
    let mut catalog = Catalog::new(TTL);

    let first = token_of(catalog.load_results(&watchlist));
    let second = token_of(catalog.submit_search(
        SearchForm {
            query: "girls".into(),
            ..SearchForm::default()
        },
        &watchlist,
    ));
    assert!(second > first);

    let applied = catalog.apply_results(
        first,
        Ok(vec![show(1, "Under the Dome", &["Drama"])]),
        Instant::now(),
    );
    assert!(!applied);
    assert!(catalog.shows.is_empty());
    assert!(catalog.state.is_loading);

    assert!(catalog.apply_results(second, Ok(vec![show(139, "Girls", &["Drama"])]), Instant::now()));
    assert_eq!(catalog.shows[0].id, 139);
    assert!(!catalog.state.is_loading);
}

#[test]
fn stale_failure_raises_no_banner() {
    let watchlist = Watchlist::in_memory();
    let mut catalog = Catalog::new(TTL);
    let first = token_of(catalog.load_results(&watchlist));
    catalog.load_results(&watchlist);

    catalog.apply_results(first, Err(failure()), Instant::now());

    assert!(catalog.notification.is_none());
}

#[test]
fn failed_results_keep_grid_and_show_banner() {
    let watchlist = Watchlist::in_memory();
    let mut catalog = Catalog::new(TTL);
    let token = token_of(catalog.load_results(&watchlist));
    catalog.apply_results(token, Ok(vec![show(1, "Under the Dome", &["Drama"])]), Instant::now());

    let token = token_of(catalog.load_results(&watchlist));
    let applied = catalog.apply_results(token, Err(failure()), Instant::now());

    assert!(!applied);
    assert!(!catalog.state.is_loading);
    assert_eq!(catalog.shows.len(), 1);
    assert_eq!(
        catalog.notification.as_ref().map(|n| n.message.as_str()),
        Some("Request failed: 500")
    );
}

#[test]
fn notification_expires_after_ttl() {
    let mut catalog = Catalog::new(TTL);
    let now = Instant::now();
    catalog.notify_error("Network error: timed out".into(), now);

    catalog.expire_notification(now + Duration::from_secs(4));
    assert!(catalog.notification.is_some());

    catalog.expire_notification(now + TTL);
    assert!(catalog.notification.is_none());
}

#[test]
fn watchlist_mode_pages_locally_without_request() {
    let mut watchlist = Watchlist::in_memory();
    for id in 1..=25 {
        watchlist.toggle(entry(id)).unwrap();
    }
    let mut catalog = Catalog::new(TTL);

    assert_eq!(catalog.toggle_mode(&watchlist), None);
    assert_eq!(catalog.state.mode, Mode::Watchlist);
    assert_eq!(catalog.state.total_pages, 2);
    assert_eq!(catalog.shows.len(), 20);
    assert!(!catalog.state.is_loading);
    assert_eq!(catalog.status, "25 in watchlist");

    assert_eq!(catalog.next_page(&watchlist), None);
    assert_eq!(catalog.state.current_page, 2);
    let ids: Vec<i64> = catalog.shows.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![21, 22, 23, 24, 25]);

    assert_eq!(catalog.next_page(&watchlist), None);
    assert_eq!(catalog.state.current_page, 2);
}

#[test]
fn empty_watchlist_is_a_single_empty_page() {
    let watchlist = Watchlist::in_memory();
    let mut catalog = Catalog::new(TTL);

    catalog.toggle_mode(&watchlist);

    assert!(catalog.shows.is_empty());
    assert_eq!(catalog.state.total_pages, 1);
    assert_eq!(catalog.state.current_page, 1);
}

#[test]
fn results_arriving_after_switch_to_watchlist_are_discarded() {
    let mut watchlist = Watchlist::in_memory();
    watchlist.toggle(entry(7)).unwrap();
    let mut catalog = Catalog::new(TTL);

    let token = token_of(catalog.load_results(&watchlist));
    catalog.toggle_mode(&watchlist);

    assert!(!catalog.apply_results(token, Ok(vec![show(1, "Arrow", &[])]), Instant::now()));
    assert_eq!(catalog.shows.len(), 1);
    assert_eq!(catalog.shows[0].id, 7);
}

#[test]
fn leaving_watchlist_mode_returns_to_search() {
    let watchlist = Watchlist::in_memory();
    let mut catalog = Catalog::new(TTL);
    catalog.submit_search(
        SearchForm {
            query: "girls".into(),
            ..SearchForm::default()
        },
        &watchlist,
    );

    catalog.toggle_mode(&watchlist);
    let task = catalog.toggle_mode(&watchlist);

    assert_eq!(catalog.state.mode, Mode::Search);
    assert!(matches!(
        task,
        Some(AppTask::LoadResults {
            request: ResultsRequest::Search { .. },
            ..
        })
    ));
}

#[test]
fn reset_returns_to_discover_first_page() {
    let watchlist = Watchlist::in_memory();
    let mut catalog = Catalog::new(TTL);
    catalog.submit_search(
        SearchForm {
            query: "girls".into(),
            genre: "Drama".into(),
            ..SearchForm::default()
        },
        &watchlist,
    );

    let task = catalog.reset(&watchlist);

    assert_eq!(catalog.state.mode, Mode::Discover);
    assert!(matches!(
        task,
        Some(AppTask::LoadResults {
            request: ResultsRequest::Discover {
                page_index: 0,
                genre: None,
            },
            ..
        })
    ));
}

#[test]
fn genres_applied_or_left_empty_on_failure() {
    let mut catalog = Catalog::new(TTL);
    catalog.apply_genres(Err(failure()), Instant::now());
    assert!(catalog.state.available_genres.is_empty());
    assert!(catalog.notification.is_some());

    catalog.apply_genres(Ok(vec!["Drama".into(), "Comedy".into()]), Instant::now());
    assert_eq!(catalog.state.available_genres, vec!["Drama", "Comedy"]);
}

#[test]
fn details_failure_leaves_modal_closed() {
    let mut catalog = Catalog::new(TTL);

    assert_eq!(catalog.open_details(139), AppTask::OpenDetails(139));
    assert_eq!(catalog.status, "Loading details...");

    catalog.apply_details(Err(failure()), Instant::now());

    assert!(catalog.details.is_none());
    assert!(catalog.status.is_empty());
    assert!(catalog.notification.is_some());
}

#[test]
fn details_open_and_close() {
    let mut catalog = Catalog::new(TTL);
    catalog.apply_details(Ok(details(1, &["Drama"])), Instant::now());
    assert_eq!(catalog.details.as_ref().map(|d| d.id), Some(1));

    catalog.close_details();
    assert!(catalog.details.is_none());
}

#[test]
fn recommendations_share_a_genre_and_exclude_the_open_show() {
    let mut catalog = Catalog::new(TTL);
    catalog.shows = vec![
        show(1, "Under the Dome", &["Drama", "Thriller"]),
        show(2, "Arrow", &["Action"]),
        show(3, "Bitten", &["Drama"]),
        show(4, "Glee", &["Music"]),
        show(5, "Homeland", &["Thriller"]),
        show(6, "Girls", &["Drama"]),
        show(7, "Lost", &["Drama"]),
        show(8, "Fargo", &["Crime", "Drama"]),
        show(9, "Hannibal", &["Thriller"]),
    ];
    assert!(catalog.recommendations().is_empty());

    catalog.details = Some(details(1, &["Drama", "Thriller"]));

    let ids: Vec<i64> = catalog.recommendations().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![3, 5, 6, 7, 8]);

    catalog.details = Some(details(4, &["Music"]));
    assert!(catalog.recommendations().is_empty());
}

#[test]
fn toggling_watchlist_twice_restores_membership() {
    let mut watchlist = Watchlist::in_memory();
    let mut catalog = Catalog::new(TTL);
    let summary = show(1, "Under the Dome", &["Drama"]);

    assert_eq!(
        catalog.toggle_watchlist(&mut watchlist, WatchlistEntry::from(&summary), Instant::now()),
        Some(true)
    );
    assert!(watchlist.contains(1));

    assert_eq!(
        catalog.toggle_watchlist(&mut watchlist, WatchlistEntry::from(&summary), Instant::now()),
        Some(false)
    );
    assert!(!watchlist.contains(1));
    assert!(catalog.notification.is_none());
}
