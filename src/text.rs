/// Re-align a model reply into the final commit message text.
///
/// Each line loses its leading whitespace (models love to indent
/// continuation lines); trailing content is left untouched. When a
/// delimiter is given, every line (blank ones included) gets a
/// `"{delimiter} "` prefix. Line count and order are preserved, and no
/// Conventional Commits shape checking happens here.
pub fn align_message(raw: &str, delimiter: Option<&str>) -> String {
    let lines = raw.split('\n').map(str::trim_start);

    match delimiter {
        Some(delimiter) if !delimiter.is_empty() => lines
            .map(|line| format!("{delimiter} {line}"))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => lines.collect::<Vec<_>>().join("\n"),
    }
}
