use axum::http::{header, HeaderMap, HeaderValue};

/// Returns the value of the first cookie named `name` across all `Cookie`
/// headers on the request.
pub fn find_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|cookie| cookie.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim())
}

/// Builds `attachment; filename="<filename>"`.
///
/// The filename is kept as supplied except where the header grammar needs
/// otherwise: `"` and `\` are backslash-escaped inside the quoted-string, and
/// control characters a header value cannot carry (all but HTAB, plus DEL)
/// become `_`.
pub fn attachment_disposition(filename: &str) -> HeaderValue {
    let mut escaped = String::with_capacity(filename.len());
    for c in filename.chars() {
        match c {
            '"' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\t' => escaped.push(c),
            c if c.is_ascii_control() => escaped.push('_'),
            c => escaped.push(c),
        }
    }

    HeaderValue::from_bytes(format!("attachment; filename=\"{}\"", escaped).as_bytes())
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"))
}
