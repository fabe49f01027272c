//! HTML rendering for the category picker page.

use html_escape::{encode_double_quoted_attribute, encode_text};
use vidpulse_core::{CategoryMap, VideoRecord};

const PAGE_TITLE: &str = "Trending Videos by Category";

const STYLE: &str = "\
body { font-family: system-ui, sans-serif; max-width: 56rem; margin: 2rem auto; padding: 0 1rem; }
form { display: flex; gap: 0.5rem; align-items: center; margin-bottom: 2rem; }
.video-item { border-bottom: 1px solid #ddd; padding: 1rem 0; }
.video-item h2 { font-size: 1.1rem; margin: 0 0 0.25rem; }
.views { color: #555; margin: 0 0 0.5rem; }
.top-comment { margin: 0; padding-left: 1rem; border-left: 3px solid #ccc; }
.top-comment footer { color: #777; font-size: 0.85rem; }
";

/// Renders the full page.
///
/// `selected` pre-selects the matching dropdown option. An empty `records`
/// slice renders the form alone.
pub(super) fn render_index(
    categories: &CategoryMap,
    selected: Option<&str>,
    records: &[VideoRecord],
) -> String {
    let mut html = String::with_capacity(4096 + records.len() * 512);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{PAGE_TITLE}</title>\n"));
    html.push_str(&format!("<style>\n{STYLE}</style>\n"));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{PAGE_TITLE}</h1>\n"));

    render_form(&mut html, categories, selected);

    if !records.is_empty() {
        html.push_str("<section class=\"video-list\">\n");
        for record in records {
            render_record(&mut html, record);
        }
        html.push_str("</section>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_form(html: &mut String, categories: &CategoryMap, selected: Option<&str>) {
    html.push_str("<form method=\"post\" action=\"/\">\n");
    html.push_str("<label for=\"vc_selected\">Category</label>\n");
    html.push_str("<select id=\"vc_selected\" name=\"vc_selected\">\n");
    for category in categories.iter() {
        let marker = if selected == Some(category.name.as_str()) {
            " selected"
        } else {
            ""
        };
        html.push_str(&format!(
            "<option value=\"{}\"{marker}>{}</option>\n",
            encode_double_quoted_attribute(&category.name),
            encode_text(&category.name),
        ));
    }
    html.push_str("</select>\n");
    html.push_str("<button type=\"submit\">Show videos</button>\n");
    html.push_str("</form>\n");
}

fn render_record(html: &mut String, record: &VideoRecord) {
    html.push_str("<div class=\"video-item\">\n");
    html.push_str(&format!(
        "<h2><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></h2>\n",
        encode_double_quoted_attribute(&record.url),
        encode_text(&record.title),
    ));
    html.push_str(&format!(
        "<p class=\"views\">{} views</p>\n",
        group_thousands(record.view_count)
    ));
    html.push_str(&format!(
        "<blockquote class=\"top-comment\">\n<p>{}</p>\n<footer>{} likes</footer>\n</blockquote>\n",
        encode_text(&record.top_comment_text),
        group_thousands(record.top_comment_like_count),
    ));
    html.push_str("</div>\n");
}

/// `1234567` -> `"1,234,567"`.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
