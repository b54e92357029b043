//! HTML rendering of the preview page

use std::fmt::Write;

use crate::preview::{PageState, PreviewEntry, PreviewLinks};

pub const PAGE_TITLE: &str = "Sphinx Documentation Previews";

const STYLE: &str = "\
body { font-family: system-ui, sans-serif; max-width: 60rem; margin: 2rem auto; padding: 0 1rem; }
.preview-item { border: 1px solid #ddd; border-radius: 6px; padding: 1rem; margin-bottom: 1rem; }
.commit-message { white-space: pre-wrap; }
.commit-meta, .preview-url { color: #555; font-size: 0.9rem; }
.error { color: red; }";

/// Escapes text for use in HTML element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders the full page for `state`
///
/// `preview_branch` names the branch readers push to in the intro text.
pub fn render_page(state: &PageState, links: &PreviewLinks, preview_branch: &str) -> String {
    let mut html = String::new();
    let branch = escape_html(preview_branch);

    // Writing into a String cannot fail.
    let _ = write!(
        html,
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"description\" content=\"Browse all available Sphinx documentation preview builds\">\n\
         <title>{PAGE_TITLE}</title>\n\
         <style>\n{STYLE}\n</style>\n\
         </head>\n\
         <body>\n\
         <h1>{PAGE_TITLE}</h1>\n\
         <p>Each preview is generated automatically when changes are pushed to the <code>{branch}</code> branch. \
         Click on any preview below to view the documentation at that commit.</p>\n"
    );

    match state {
        PageState::Loading => html.push_str("<p>Loading previews...</p>\n"),
        PageState::Error(message) => {
            let _ = writeln!(
                html,
                "<p class=\"error\">Error loading previews: {}</p>",
                escape_html(message)
            );
        }
        PageState::Loaded(entries) if entries.is_empty() => {
            let _ = writeln!(
                html,
                "<p>No previews available yet. Push to the <code>{branch}</code> branch to create one!</p>"
            );
        }
        PageState::Loaded(entries) => {
            html.push_str("<div class=\"preview-list\">\n");
            for entry in entries {
                render_entry(&mut html, entry, links);
            }
            html.push_str("</div>\n");
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_entry(html: &mut String, entry: &PreviewEntry, links: &PreviewLinks) {
    let id = escape_html(&entry.id);
    let relative = escape_html(&links.relative_path(&entry.id));
    let hosted = escape_html(&links.hosted_url(&entry.id));

    let _ = write!(
        html,
        "<div class=\"preview-item\" id=\"preview-{id}\">\n\
         <h3><a href=\"{relative}\" target=\"_blank\" rel=\"noopener noreferrer\">{title}</a></h3>\n\
         <p class=\"commit-message\">{message}</p>\n\
         <p class=\"commit-meta\">{meta}</p>\n\
         <p class=\"preview-url\"><a href=\"{hosted}\" target=\"_blank\" rel=\"noopener noreferrer\">{hosted}</a></p>\n\
         </div>\n",
        title = escape_html(&entry.title),
        message = escape_html(&entry.message),
        meta = escape_html(&entry.meta()),
    );
}
