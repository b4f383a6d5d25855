use super::*;

#[test]
fn nav_links_follow_route_table_order() {
    assert_eq!(
        nav_links(RouteTable::standard()),
        vec![("/", "Home"), ("/about", "About"), ("/users", "Users"), ("/login", "Login")]
    );
}

#[test]
fn nav_links_skip_pages_without_a_path() {
    let entries = [
        models::RouteEntry { pattern: models::PathPattern::Exact("/"), name: "home", page: Page::Home },
        models::RouteEntry {
            pattern: models::PathPattern::CatchAll { param: "pathMatch" },
            name: "not-found",
            page: Page::NotFound,
        },
    ];
    assert_eq!(nav_links(RouteTable::new(&entries)), vec![("/", "Home")]);
}

#[test]
fn routed_pages_follow_table_order() {
    let explicit: Vec<Page> = RouteTable::standard()
        .entries()
        .iter()
        .filter(|entry| !entry.pattern.is_catch_all())
        .map(|entry| entry.page)
        .collect();
    assert_eq!(explicit, ROUTED_PAGES);
}

#[test]
fn every_routed_segment_is_a_table_path() {
    let table = RouteTable::standard();
    for page in ROUTED_PAGES {
        let path = format!("/{}", segment(page));
        assert_eq!(table.path_for(page), Some(path.as_str()), "page {page:?}");
        assert_eq!(resolve(&path).page(), page);
    }
}

#[test]
fn home_segment_is_empty() {
    assert_eq!(segment(Page::Home), "");
    assert_eq!(segment(Page::Login), "login");
}
