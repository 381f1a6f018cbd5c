//! Starter document and file naming defaults.
//!
//! The editor boots with a built-in placeholder page so the preview has
//! something to render before a file is opened.

/// Label given to documents that were never opened from a file.
pub const UNTITLED_LABEL: &str = "untitled.html";

/// File extensions the open dialog advertises.
///
/// Advisory only; opened content is never validated against them.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["html", "htm"];

/// Built-in placeholder document shown at startup.
pub const STARTER_DOCUMENT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>HTML Preview</title>
  <style>
    body {
      font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Oxygen, Ubuntu, Cantarell, "Open Sans", "Helvetica Neue", sans-serif;
      max-width: 800px;
      margin: 0 auto;
      padding: 20px;
      line-height: 1.6;
    }
    h1 { color: #2563eb; }
    p { margin-bottom: 16px; }
  </style>
</head>
<body>
  <h1>Hello, HTML Editor!</h1>
  <p>This is a simple HTML editor with real-time preview. Edit the HTML on the left to see changes reflected on the right.</p>
  <p>Try adding some elements:</p>
  <ul>
    <li>Headers (h1, h2, h3)</li>
    <li>Paragraphs</li>
    <li>Lists</li>
    <li>Images</li>
    <li>Links</li>
  </ul>
</body>
</html>"#;

/// Whether `name` ends in one of the advertised markup extensions.
pub fn has_accepted_extension(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    ACCEPTED_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{ext}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_html_and_htm() {
        assert!(has_accepted_extension("page.html"));
        assert!(has_accepted_extension("page.htm"));
        assert!(has_accepted_extension("PAGE.HTML"));
    }

    #[test]
    fn rejects_other_extensions() {
        assert!(!has_accepted_extension("notes.txt"));
        assert!(!has_accepted_extension("html"));
        assert!(!has_accepted_extension("archive.html.gz"));
    }

    #[test]
    fn starter_document_is_a_complete_page() {
        assert!(STARTER_DOCUMENT.starts_with("<!DOCTYPE html>"));
        assert!(STARTER_DOCUMENT.contains("</html>"));
    }
}
