use crate::compat::{ToOwned, Vec};
use crate::param::Param;
use crate::percent_encode::percent_decode_component;

/// Prune fragment (#hash) from URL string
/// Returns (`url_without_fragment`, `fragment_without_hash`)
fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split a URL into its parts around the first `#` and the first `?` before it.
/// Returns (`base`, `query_without_question_mark`, `fragment_without_hash`)
pub fn split_url(url: &str) -> (&str, Option<&str>, Option<&str>) {
    let (url, fragment) = prune_fragment(url);
    match memchr::memchr(b'?', url.as_bytes()) {
        Some(pos) => (&url[..pos], Some(&url[pos + 1..]), fragment),
        None => (url, None, fragment),
    }
}

/// Parse the query string of `url` into an ordered parameter list.
///
/// Empty segments (`a=1&&b=2`, trailing `&`) are skipped. Each segment is split on its
/// first `=`; a segment without `=` yields a valueless parameter. Keys and values are
/// decoded after splitting, so an escaped `%26` or `%3D` never acts as a delimiter.
pub fn get_url_params(url: &str) -> Vec<Param> {
    let Some(query) = split_url(url).1 else {
        return Vec::new();
    };

    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = match pair.split_once('=') {
                Some((key, value)) => (key, Some(percent_decode_component(value))),
                None => (pair, None),
            };
            Param {
                key: percent_decode_component(key),
                value,
                raw: Some(pair.to_owned()),
            }
        })
        .collect()
}
