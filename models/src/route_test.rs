use super::*;

fn standard_page(path: &str) -> Page {
    RouteTable::standard().resolve(path).unwrap().page()
}

// =============================================================================
// standard table
// =============================================================================

#[test]
fn standard_table_is_valid() {
    assert_eq!(RouteTable::standard().validate(), Ok(()));
}

#[test]
fn standard_table_order_and_names() {
    let names: Vec<_> = RouteTable::standard().entries().iter().map(|e| e.name).collect();
    assert_eq!(names, ["home", "about", "users", "login", "not-found"]);
}

#[test]
fn declared_paths_resolve_to_their_pages() {
    assert_eq!(standard_page("/"), Page::Home);
    assert_eq!(standard_page("/about"), Page::About);
    assert_eq!(standard_page("/users"), Page::UserList);
    assert_eq!(standard_page("/login"), Page::Login);
}

#[test]
fn undeclared_paths_resolve_to_not_found() {
    for path in ["/nope", "/users/42", "/about/team", "/login-now", "/u", "/aboutx"] {
        assert_eq!(standard_page(path), Page::NotFound, "path {path:?}");
    }
}

#[test]
fn catch_all_never_shadows_explicit_routes() {
    let table = RouteTable::standard();
    for entry in table.entries().iter().filter(|e| !e.pattern.is_catch_all()) {
        let resolved = table.resolve(&entry.pattern.to_string()).unwrap();
        assert_eq!(resolved.entry.name, entry.name);
        assert!(resolved.params.is_empty());
    }
}

#[test]
fn resolve_ignores_query_and_fragment() {
    assert_eq!(standard_page("/about?tab=team"), Page::About);
    assert_eq!(standard_page("/users#top"), Page::UserList);
    assert_eq!(standard_page("/?next=/users"), Page::Home);
}

#[test]
fn resolve_tolerates_single_trailing_slash() {
    assert_eq!(standard_page("/about/"), Page::About);
    assert_eq!(standard_page("/about//"), Page::NotFound);
}

#[test]
fn resolve_is_case_insensitive() {
    assert_eq!(standard_page("/About"), Page::About);
    assert_eq!(standard_page("/USERS"), Page::UserList);
}

#[test]
fn empty_path_is_home() {
    assert_eq!(standard_page(""), Page::Home);
}

#[test]
fn catch_all_captures_segments() {
    let m = RouteTable::standard().resolve("/a/b/c?x=1").unwrap();
    assert_eq!(m.entry.name, "not-found");
    assert_eq!(m.params, ["a", "b", "c"]);
    assert_eq!(m.captured_path(), "a/b/c");
}

#[test]
fn catch_all_decodes_segments() {
    let m = RouteTable::standard().resolve("/caf%C3%A9/a%20b").unwrap();
    assert_eq!(m.params, ["café", "a b"]);
}

#[test]
fn explicit_routes_match_after_decoding() {
    assert_eq!(standard_page("/%61bout"), Page::About);
    assert_eq!(standard_page("/users%2F"), Page::UserList);
    assert_eq!(standard_page("/%4Cogin?next=%2F"), Page::Login);
    assert_eq!(standard_page("/about%2F%2F"), Page::NotFound);
}

#[test]
fn catch_all_keeps_encoded_slash_inside_segment() {
    let m = RouteTable::standard().resolve("/a%2Fb/c").unwrap();
    assert_eq!(m.page(), Page::NotFound);
    assert_eq!(m.params, ["a/b", "c"]);
}

#[test]
fn free_resolve_is_total_over_standard_table() {
    assert_eq!(resolve("/").entry.name, "home");
    assert_eq!(resolve("/users?x=1").page(), Page::UserList);

    let missed = resolve("/no/such/page");
    assert_eq!(missed.entry.name, "not-found");
    assert_eq!(missed.params, ["no", "such", "page"]);
}

#[test]
fn page_for_uses_standard_table() {
    assert_eq!(page_for("/login"), Page::Login);
    assert_eq!(page_for("/missing"), Page::NotFound);
}

#[test]
fn path_for_and_by_name() {
    let table = RouteTable::standard();
    assert_eq!(table.path_for(Page::UserList), Some("/users"));
    assert_eq!(table.path_for(Page::NotFound), None);
    assert_eq!(table.by_name("login").map(|e| e.page), Some(Page::Login));
    assert!(table.by_name("admin").is_none());
}

#[test]
fn catch_all_displays_as_pattern() {
    assert_eq!(PathPattern::CatchAll { param: "pathMatch" }.to_string(), "/:pathMatch(.*)*");
    assert_eq!(PathPattern::Exact("/about").to_string(), "/about");
}

// =============================================================================
// validate
// =============================================================================

const CATCH_ALL: RouteEntry =
    RouteEntry { pattern: PathPattern::CatchAll { param: "pathMatch" }, name: "not-found", page: Page::NotFound };

#[test]
fn validate_rejects_catch_all_before_explicit_routes() {
    let entries = [
        RouteEntry { pattern: PathPattern::Exact("/"), name: "home", page: Page::Home },
        CATCH_ALL,
        RouteEntry { pattern: PathPattern::Exact("/users"), name: "users", page: Page::UserList },
    ];
    let table = RouteTable::new(&entries);
    assert_eq!(table.validate(), Err(RouteTableError::CatchAllNotLast("not-found")));
    // First match wins, so the misplaced catch-all swallows /users.
    assert_eq!(table.resolve("/users").unwrap().page(), Page::NotFound);
}

#[test]
fn validate_requires_catch_all() {
    let entries = [RouteEntry { pattern: PathPattern::Exact("/"), name: "home", page: Page::Home }];
    let table = RouteTable::new(&entries);
    assert_eq!(table.validate(), Err(RouteTableError::MissingCatchAll));
    assert!(table.resolve("/other").is_none());
}

#[test]
fn validate_rejects_empty_table() {
    assert_eq!(RouteTable::new(&[]).validate(), Err(RouteTableError::MissingCatchAll));
}

#[test]
fn validate_rejects_duplicate_names() {
    let entries = [
        RouteEntry { pattern: PathPattern::Exact("/"), name: "home", page: Page::Home },
        RouteEntry { pattern: PathPattern::Exact("/start"), name: "home", page: Page::Home },
        CATCH_ALL,
    ];
    assert_eq!(RouteTable::new(&entries).validate(), Err(RouteTableError::DuplicateName("home")));
}

#[test]
fn validate_rejects_equivalent_paths() {
    let entries = [
        RouteEntry { pattern: PathPattern::Exact("/about"), name: "about", page: Page::About },
        RouteEntry { pattern: PathPattern::Exact("/About/"), name: "about-2", page: Page::About },
        CATCH_ALL,
    ];
    assert_eq!(RouteTable::new(&entries).validate(), Err(RouteTableError::DuplicatePath("/About/")));
}

#[test]
fn validate_rejects_relative_paths() {
    let entries = [RouteEntry { pattern: PathPattern::Exact("about"), name: "about", page: Page::About }, CATCH_ALL];
    assert_eq!(RouteTable::new(&entries).validate(), Err(RouteTableError::InvalidPath("about")));
}
