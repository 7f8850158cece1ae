//! URL template expansion.
//!
//! Templates use the RFC 6570 subset Graph URL conventions need:
//! `{+name}` substitutes unencoded (reserved expansion, used for the base
//! URL), `{name}` substitutes percent-encoded (path segments), and a trailing
//! `{?a,b,c}` expression lists the query parameters the endpoint understands
//! under their literal wire names (`%24select`, `%24filter`, ...).

use std::collections::HashMap;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::errors::GraphError;

/// Characters escaped when substituting a value into a path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Expand `template` with the bound path parameters and the present query
/// parameters. Query parameters named by the template's `{?...}` expression
/// come first, in template order; the rest follow in insertion order. An
/// unbound path parameter is an error.
pub(crate) fn expand(
    template: &str,
    path_parameters: &HashMap<String, String>,
    query_parameters: &[(String, String)],
) -> Result<String, GraphError> {
    let (path_template, declared) = split_query_expression(template);

    let mut out = String::with_capacity(template.len());
    let mut rest = path_template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after
            .find('}')
            .ok_or_else(|| GraphError::Template(after.to_string()))?;
        let token = &after[..end];
        let (name, reserved) = match token.strip_prefix('+') {
            Some(name) => (name, true),
            None => (token, false),
        };
        let value = path_parameters
            .get(name)
            .ok_or_else(|| GraphError::Template(name.to_string()))?;
        if reserved {
            out.push_str(value);
        } else {
            out.push_str(&utf8_percent_encode(value, PATH_SEGMENT).to_string());
        }
        rest = &after[end + 1..];
    }
    out.push_str(rest);

    let pairs = order_query(&declared, query_parameters);
    if !pairs.is_empty() {
        out.push('?');
        out.push_str(&serde_urlencoded::to_string(&pairs)?);
    }
    Ok(out)
}

/// Split a trailing `{?a,b,c}` expression off the template, returning the
/// path part and the percent-decoded parameter names it declares.
fn split_query_expression(template: &str) -> (&str, Vec<String>) {
    let Some(start) = template.rfind("{?") else {
        return (template, Vec::new());
    };
    if !template.ends_with('}') {
        return (template, Vec::new());
    }
    let names = template[start + 2..template.len() - 1]
        .split(',')
        .filter(|name| !name.is_empty())
        .map(|name| percent_decode_str(name).decode_utf8_lossy().into_owned())
        .collect();
    (&template[..start], names)
}

fn order_query<'a>(
    declared: &'a [String],
    query_parameters: &'a [(String, String)],
) -> Vec<(&'a str, &'a str)> {
    let mut pairs: Vec<(&str, &str)> = Vec::with_capacity(query_parameters.len());
    for name in declared {
        if let Some((key, value)) = query_parameters.iter().find(|(key, _)| key == name) {
            pairs.push((key.as_str(), value.as_str()));
        }
    }
    for (key, value) in query_parameters {
        if !declared.contains(key) {
            pairs.push((key.as_str(), value.as_str()));
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[rstest]
    fn test_reserved_expansion_is_not_encoded() {
        let url = expand(
            "{+baseurl}/solutions/backupRestore",
            &params(&[("baseurl", "https://graph.microsoft.com/v1.0")]),
            &[],
        )
        .unwrap();
        assert_eq!(url, "https://graph.microsoft.com/v1.0/solutions/backupRestore");
    }

    #[rstest]
    fn test_simple_expansion_is_percent_encoded() {
        let url = expand(
            "{+baseurl}/webinars/{id}",
            &params(&[("baseurl", "https://g"), ("id", "a b/c")]),
            &[],
        )
        .unwrap();
        assert_eq!(url, "https://g/webinars/a%20b%2Fc");
    }

    #[rstest]
    fn test_unbound_parameter_is_an_error() {
        let err = expand("{+baseurl}/x/{id}", &params(&[("baseurl", "https://g")]), &[]).unwrap_err();
        assert!(matches!(err, GraphError::Template(name) if name == "id"));
    }

    #[rstest]
    fn test_declared_query_order_wins_over_insertion_order() {
        let query = vec![
            ("$top".to_string(), "10".to_string()),
            ("$filter".to_string(), "x eq 1".to_string()),
        ];
        let url = expand(
            "{+baseurl}/units{?%24filter,%24top}",
            &params(&[("baseurl", "https://g")]),
            &query,
        )
        .unwrap();
        assert_eq!(url, "https://g/units?%24filter=x+eq+1&%24top=10");
    }

    #[rstest]
    fn test_undeclared_parameters_are_appended() {
        let query = vec![("custom".to_string(), "1".to_string())];
        let url = expand(
            "{+baseurl}/units{?%24top}",
            &params(&[("baseurl", "https://g")]),
            &query,
        )
        .unwrap();
        assert_eq!(url, "https://g/units?custom=1");
    }

    #[rstest]
    fn test_no_query_yields_no_question_mark() {
        let url = expand(
            "{+baseurl}/units{?%24top}",
            &params(&[("baseurl", "https://g")]),
            &[],
        )
        .unwrap();
        assert_eq!(url, "https://g/units");
    }
}
