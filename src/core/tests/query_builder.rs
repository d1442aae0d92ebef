use super::{build_query, SearchRequest, DEFAULT_MIN_STARS};

#[test]
fn minimal_request_has_stars_and_language_only() {
    let req = SearchRequest::new("todo", 100);
    assert_eq!(build_query(&req), "todo+stars:>=100+language:elm");
}

#[test]
fn scope_clause_goes_after_stars() {
    let req = SearchRequest::new("todo", 50).scope_field("name");
    assert_eq!(build_query(&req), "todo+stars:>=50+in:name+language:elm");
}

#[test]
fn user_clause_goes_before_language() {
    let req = SearchRequest::new("todo", 10).user("alice");
    assert_eq!(build_query(&req), "todo+stars:>=10+user:alice+language:elm");
}

#[test]
fn all_clauses_keep_fixed_order() {
    let req = SearchRequest::new("todo", 10).scope_field("name").user("alice");
    assert_eq!(
        build_query(&req),
        "todo+stars:>=10+in:name+user:alice+language:elm"
    );
}

// Skipped optional clauses must leave the running query untouched, never replace it.
#[test]
fn empty_optionals_act_as_identity() {
    let absent = SearchRequest::new("todo", 100);
    let empty = SearchRequest::new("todo", 100).scope_field("").user("");
    assert_eq!(build_query(&absent), "todo+stars:>=100+language:elm");
    assert_eq!(build_query(&empty), "todo+stars:>=100+language:elm");
}

#[test]
fn language_clause_is_always_last() {
    let requests = [
        SearchRequest::new("a", 0),
        SearchRequest::new("b", 1).scope_field("readme"),
        SearchRequest::new("c", 2).user("bob"),
        SearchRequest::new("d", 3).scope_field("description").user("carol"),
    ];
    for req in &requests {
        let q = build_query(req);
        assert!(q.ends_with("+language:elm"), "{q}");
        assert_eq!(q.matches("language:").count(), 1, "{q}");
    }
}

#[test]
fn omitted_fields_produce_no_clause() {
    let q = build_query(&SearchRequest::new("parser", 5));
    assert!(!q.contains("+in:"), "{q}");
    assert!(!q.contains("+user:"), "{q}");
}

#[test]
fn building_twice_gives_same_string() {
    let req = SearchRequest::new("todo", 10).scope_field("name").user("alice");
    assert_eq!(build_query(&req), build_query(&req));
}

#[test]
fn negative_stars_pass_through() {
    let req = SearchRequest::new("todo", -3);
    assert_eq!(build_query(&req), "todo+stars:>=-3+language:elm");
}

#[test]
fn deserializes_camel_case_payload() {
    let req: SearchRequest = serde_json::from_str(
        r#"{"query":"todo","minStars":10,"scopeField":"name","user":"alice"}"#,
    )
    .unwrap();
    assert_eq!(
        req,
        SearchRequest::new("todo", 10).scope_field("name").user("alice")
    );
}

#[test]
fn deserializes_legacy_port_names() {
    let req: SearchRequest = serde_json::from_str(
        r#"{"query":"todo","queryMinStars":50,"queryIn":"name","queryUser":"alice"}"#,
    )
    .unwrap();
    assert_eq!(req.min_stars, 50);
    assert_eq!(req.scope_field.as_deref(), Some("name"));
    assert_eq!(req.user.as_deref(), Some("alice"));
}

#[test]
fn missing_min_stars_uses_default() {
    let req: SearchRequest = serde_json::from_str(r#"{"query":"todo"}"#).unwrap();
    assert_eq!(req.min_stars, DEFAULT_MIN_STARS);
    assert_eq!(build_query(&req), "todo+stars:>=0+language:elm");
}

#[test]
fn null_optionals_are_absent() {
    let req: SearchRequest =
        serde_json::from_str(r#"{"query":"todo","minStars":1,"scopeField":null,"user":null}"#)
            .unwrap();
    assert_eq!(build_query(&req), "todo+stars:>=1+language:elm");
}
