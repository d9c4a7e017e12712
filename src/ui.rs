//! Server-rendered translation form.

use std::fmt::Write;

use crate::languages::LanguageRegistry;

const PAGE_STYLE: &str = "\
body{font-family:sans-serif;max-width:960px;margin:2rem auto;padding:0 1rem}\
h1{text-align:center}\
.row{display:flex;gap:1rem;margin-bottom:1rem}\
.row>label{flex:1;display:flex;flex-direction:column}\
textarea{font:inherit;min-height:8em}\
.error{color:#b00020}\
button{font-size:1.1rem;padding:.5rem 2rem}\
footer{margin-top:2rem;font-size:.9rem;color:#555}";

/// Field values the page is rendered with
#[derive(Debug, Clone, Default)]
pub struct PageState<'a> {
    pub text: &'a str,
    pub source: &'a str,
    pub target: &'a str,
    pub result: &'a str,
    pub error: Option<&'a str>,
}

/// Initial page: empty text, default dropdown selections
pub fn render_index(registry: &LanguageRegistry) -> String {
    render_page(
        registry,
        &PageState {
            source: registry.default_source(),
            target: registry.default_target(),
            ..PageState::default()
        },
    )
}

pub fn render_page(registry: &LanguageRegistry, state: &PageState<'_>) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Interslavic translator</title>\n");
    let _ = writeln!(html, "<style>{}</style>", PAGE_STYLE);
    html.push_str("</head>\n<body>\n<h1>Interslavic translator</h1>\n");
    html.push_str("<form method=\"post\" action=\"/translate\">\n<div class=\"row\">\n");
    push_select(&mut html, registry, "from", "From", state.source);
    push_select(&mut html, registry, "to", "To", state.target);
    html.push_str("</div>\n<div class=\"row\">\n");
    // The parser drops one newline right after <textarea>; emit it so text
    // starting with an empty line survives the round trip
    let _ = writeln!(
        html,
        "<label>Text<textarea name=\"text\" rows=\"5\" placeholder=\"Your text\">\n{}</textarea></label>",
        escape_html(state.text)
    );
    let _ = writeln!(
        html,
        "<label>Result<textarea rows=\"5\" placeholder=\"Translation...\" readonly>\n{}</textarea></label>",
        escape_html(state.result)
    );
    html.push_str("</div>\n");
    if let Some(error) = state.error {
        let _ = writeln!(html, "<p class=\"error\">{}</p>", escape_html(error));
    }
    html.push_str("<button type=\"submit\">Translate</button>\n</form>\n");
    html.push_str(
        "<footer>Finetuned model \
         <a href=\"https://ai.facebook.com/research/no-language-left-behind/\">NLLB200</a> \
         using corpus of \
         <a href=\"https://interslavic-dictionary.com/grammar\">Inter-Slavic</a> language</footer>\n",
    );
    html.push_str("</body>\n</html>\n");
    html
}

fn push_select(
    html: &mut String,
    registry: &LanguageRegistry,
    field: &str,
    label: &str,
    selected: &str,
) {
    let _ = writeln!(html, "<label>{}<select name=\"{}\">", label, field);
    for name in registry.display_names() {
        let marker = if name == selected { " selected" } else { "" };
        let escaped = escape_html(name);
        let _ = writeln!(html, "<option value=\"{0}\"{1}>{0}</option>", escaped, marker);
    }
    html.push_str("</select></label>\n");
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
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
