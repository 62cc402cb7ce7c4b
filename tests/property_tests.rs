#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Properties that hold across many inputs:
/// - no-op action sets leave URLs untouched, escapes and fragments included
/// - serialize then parse reconstructs a parameter list
/// - results are independent of the thread computing them
use qsm::{
    ActionSet, Param, construct_url_params, get_url_params, qsm, resolve_url_params, split_url,
};
use std::thread;

const URLS: &[&str] = &[
    "https://example.com/foo",
    "https://example.com/foo?bar=xx&baz=FoO",
    "https://www.google.cz/search?q=hello+world&num=20&tbm=isch",
    "https://www.google.cz/search?num=12&q=hello+world&num=x3&num=x4",
    "https://example.org?f%5BnumPages%5D%5Bv%5D%5Bmin%5D=1",
    "/local?flag&empty=&a=1",
    "/path/to?x=%C3%A9t%C3%A9&y=a%26b",
    "?only=query",
    "https://x.com/s?q=c%2B%2B",
    "/login?next=%2Fhome&back=/raw/path",
    "/k?k=%5b&l=%5B",
    "/k?k=%FF&bad=%zz&pct=100%",
    "/a?x=1#top",
    "/a?x=1#",
    "/a#frag?not=query",
    "/s?a=%26%3D%23&b=%20+",
];

fn param_lists() -> Vec<Vec<Param>> {
    vec![
        vec![],
        vec![Param::new("a", "1")],
        vec![Param::new("foo", "bar"), Param::new("bar", "123")],
        vec![Param::new("num", "20"), Param::new("num", "40"), Param::new("q", "x")],
        vec![Param::bare("flag"), Param::new("empty", "")],
        vec![Param::new("f[min]", "2"), Param::new("math", "1+1=2")],
        vec![Param::new("amp&key", "a&b"), Param::new("pct", "100%")],
        vec![Param::new("name", "François"), Param::new("space", "two words")],
        vec![Param::new("sep", "?#/:"), Param::new("quote", "\"<>`")],
        vec![Param::new("lang", "c++"), Param::new("q", "hello world")],
    ]
}

#[test]
fn test_noop_is_identity() {
    for url in URLS {
        assert_eq!(qsm(url, &ActionSet::new()).as_deref(), Some(*url), "url: {url}");
    }
}

#[test]
fn test_empty_parts_are_noop() {
    let actions = ActionSet {
        remove: Some(vec![]),
        set: Some(vec![]),
        toggle: Some(vec![]),
    };
    for url in URLS {
        assert_eq!(qsm(url, &actions).as_deref(), Some(*url), "url: {url}");
    }
}

#[test]
fn test_round_trip() {
    for params in param_lists() {
        let url = format!("https://example.com/base?{}", construct_url_params(&params));
        assert_eq!(get_url_params(&url), params, "url: {url}");
    }
}

#[test]
fn test_base_is_preserved() {
    let actions = ActionSet::new().set("page", 3).remove("q");
    for url in URLS {
        let next = qsm(url, &actions).unwrap();
        assert_eq!(split_url(&next).0, split_url(url).0, "url: {url}");
        assert_eq!(split_url(&next).2, split_url(url).2, "url: {url}");
    }
}

#[test]
fn test_untouched_params_survive_changes() {
    let actions = ActionSet::new().set("zz", 1);
    for url in URLS {
        let (_, query, _) = split_url(url);
        let next = qsm(url, &actions).unwrap();
        let (_, next_query, _) = split_url(&next);
        match query.filter(|q| !q.is_empty()) {
            Some(query) => assert_eq!(next_query, Some(format!("{query}&zz=1").as_str())),
            None => assert_eq!(next_query, Some("zz=1")),
        }
    }
}

#[test]
fn test_removed_keys_never_appear() {
    let actions = ActionSet::new().remove("num").toggle("tbm", "isch");
    for url in URLS {
        let next = qsm(url, &actions).unwrap();
        let params = get_url_params(&next);
        assert!(params.iter().all(|p| p.key != "num"), "url: {next}");
    }
}

#[test]
fn test_resolve_does_not_touch_input() {
    let actions = ActionSet::new()
        .set("a", "x")
        .toggle("foo", "bar")
        .remove("num");
    for params in param_lists() {
        let before = params.clone();
        let _ = resolve_url_params(&params, &actions);
        assert_eq!(params, before);
    }
}

#[test]
fn test_concurrent_calls() {
    let actions = ActionSet::new().set_many("num", [20, 40, 60]).toggle("tbm", "isch");
    let expected: Vec<Option<String>> = URLS.iter().map(|url| qsm(url, &actions)).collect();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| URLS.iter().map(|url| qsm(url, &actions)).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
