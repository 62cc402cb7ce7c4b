use crate::compat::String;
use crate::param::Param;
use crate::percent_encode::percent_encode_component_into;

/// Serialize an ordered parameter list into a query string without leading `?`.
///
/// A parameter parsed from a URL is written back from its source text. Others
/// have their key and value percent-encoded independently, and a valueless
/// one is written as a bare key. An empty list yields an empty string.
pub fn construct_url_params(params: &[Param]) -> String {
    let mut result = String::new();
    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            result.push('&');
        }
        if let Some(raw) = &param.raw {
            result.push_str(raw);
            continue;
        }
        percent_encode_component_into(&mut result, &param.key);
        if let Some(value) = &param.value {
            result.push('=');
            percent_encode_component_into(&mut result, value);
        }
    }
    result
}
