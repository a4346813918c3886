use spacecapy_core::IndexPage;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// Fill the index template. Values are HTML-escaped.
///
/// Markers are resolved in a single pass over the template, so substituted
/// values are never scanned for markers themselves.
pub fn render_index(page: &IndexPage) -> String {
    let url = escape_html(&page.url);
    let visitors_count = page.visitors_count.to_string();

    let mut out = String::with_capacity(INDEX_TEMPLATE.len() + url.len());
    let mut rest = INDEX_TEMPLATE;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        match &after[..end] {
            "url" => out.push_str(&url),
            "visitors_count" => out.push_str(&visitors_count),
            _ => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
