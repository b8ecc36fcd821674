use super::prd_export::ExportFile;
use super::prd_types::{AppType, ExportFormat, GenerationForm, OutputLanguage};

#[derive(Debug, Default)]
pub struct PageView<'a> {
    pub form: Option<&'a GenerationForm>,
    pub config_error: Option<String>,
    pub warning: Option<String>,
    pub error: Option<String>,
    pub document: Option<(&'a str, &'a ExportFile)>,
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn select<T: PartialEq + Copy>(
    html: &mut String,
    name: &str,
    options: &[T],
    selected: T,
    label: fn(&T) -> &'static str,
) {
    html.push_str(&format!(r#"<select id="{0}" name="{0}">"#, name));
    for option in options {
        html.push_str(&format!(
            r#"<option value="{0}"{1}>{0}</option>"#,
            label(option),
            if *option == selected { " selected" } else { "" }
        ));
    }
    html.push_str("</select>");
}

pub fn render_page(view: &PageView<'_>) -> String {
    let default_form = GenerationForm::default();
    let form = view.form.unwrap_or(&default_form);
    let mut html = String::new();

    html.push_str(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>PRD Forge - AI PRD Generator</title>
<style>
body { font-family: sans-serif; max-width: 960px; margin: 2rem auto; padding: 0 1rem; }
label { display: block; margin-top: 1rem; font-weight: bold; }
input, textarea, select { width: 100%; padding: .4rem; box-sizing: border-box; }
textarea { min-height: 8rem; }
.banner { padding: .75rem; margin: 1rem 0; border-radius: 4px; }
.error { background: #fdecea; color: #611a15; }
.warning { background: #fff4e5; color: #663c00; }
pre { white-space: pre-wrap; background: #f6f8fa; padding: 1rem; }
</style>
</head>
<body>
<h1>PRD Forge - AI PRD Generator</h1>
<p>Generate professional Product Requirements Documents (PRDs) from simple app ideas.</p>
"#,
    );

    if let Some(message) = &view.config_error {
        html.push_str(&format!(r#"<div class="banner error">{}</div>"#, escape_html(message)));
        html.push('\n');
    }
    if let Some(message) = &view.warning {
        html.push_str(&format!(r#"<div class="banner warning">{}</div>"#, escape_html(message)));
        html.push('\n');
    }
    if let Some(message) = &view.error {
        html.push_str(&format!(r#"<div class="banner error">{}</div>"#, escape_html(message)));
        html.push('\n');
    }

    html.push_str(r#"<form method="post" action="/">"#);
    html.push_str(&format!(
        r#"<label for="app_name">App Name</label><input id="app_name" name="app_name" placeholder="e.g., PRD Forge" value="{}">"#,
        escape_html(&form.app_name)
    ));
    html.push_str(&format!(
        r#"<label for="app_idea">Describe your app idea</label><textarea id="app_idea" name="app_idea" placeholder="Enter a short description of your app...">{}</textarea>"#,
        escape_html(&form.app_idea)
    ));
    html.push_str(r#"<label for="app_type">App Type</label>"#);
    select(&mut html, "app_type", &AppType::ALL, form.app_type, AppType::label);
    html.push_str(r#"<label for="language">Output Language</label>"#);
    select(
        &mut html,
        "language",
        &OutputLanguage::ALL,
        form.language,
        OutputLanguage::label,
    );
    html.push_str(r#"<label for="export_format">Export Format</label>"#);
    select(
        &mut html,
        "export_format",
        &ExportFormat::ALL,
        form.export_format,
        ExportFormat::label,
    );
    html.push_str(r#"<p><button type="submit">Generate PRD</button></p></form>"#);

    if let Some((text, file)) = view.document {
        html.push_str(&format!(
            r#"<h2>Generated PRD</h2><pre id="prd">{}</pre><p><a id="download" href="{}" download="{}">Download PRD ({})</a></p>"#,
            escape_html(text),
            file.data_url(),
            escape_html(&file.file_name),
            form.export_format.label()
        ));
    }

    html.push_str("\n</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prd::prd_export::export_file;
    use chrono::NaiveDate;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_empty_page_has_form_and_no_document() {
        let html = render_page(&PageView::default());

        assert!(html.contains(r#"name="app_name""#));
        assert!(html.contains(r#"<option value="IoT App">"#));
        assert!(html.contains(r#"<option value="Telugu">"#));
        assert!(html.contains(r#"<option value="Markdown" selected>"#));
        assert!(!html.contains(r#"id="download""#));
    }

    #[test]
    fn test_document_and_download_link() {
        let form = GenerationForm {
            app_name: "My <App>".to_string(),
            app_idea: "idea".to_string(),
            export_format: ExportFormat::Text,
            ..GenerationForm::default()
        };
        let timestamp = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let file = export_file(&form.app_name, "<b>PRD</b>", form.export_format, timestamp);

        let html = render_page(&PageView {
            form: Some(&form),
            document: Some(("<b>PRD</b>", &file)),
            ..PageView::default()
        });

        assert!(html.contains("&lt;b&gt;PRD&lt;/b&gt;"));
        assert!(html.contains(r#"value="My &lt;App&gt;""#));
        assert!(html.contains(r#"download="My_&lt;App&gt;_PRD_20240101_120000.txt""#));
        assert!(html.contains("data:text/plain;charset=utf-8;base64,"));
        assert!(html.contains("Download PRD (Text)"));
    }
}
