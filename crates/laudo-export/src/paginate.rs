use crate::styles::PageLayout;

/// One page of wrapped report text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// 1-based.
    pub number: usize,
    pub lines: Vec<String>,
}

/// Split plain text into pages.
///
/// Each `\n`-separated line is word-wrapped to `chars_per_line` characters
/// (words longer than a line are hard-split) and the wrapped lines are
/// grouped `lines_per_page` at a time. Blank lines are kept. Zero-sized
/// layouts are treated as one character / one line.
pub fn paginate(text: &str, layout: &PageLayout) -> Vec<Page> {
    let width = layout.chars_per_line.max(1);
    let height = layout.lines_per_page.max(1);

    let wrapped: Vec<String> = text.lines().flat_map(|line| wrap_line(line, width)).collect();

    let pages: Vec<Page> = wrapped
        .chunks(height)
        .enumerate()
        .map(|(i, lines)| Page {
            number: i + 1,
            lines: lines.to_vec(),
        })
        .collect();

    tracing::debug!(lines = wrapped.len(), pages = pages.len(), "text paginated");
    pages
}

/// Word-wrap a single line. Always yields at least one (possibly empty) line.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in line.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > width {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            let chars: Vec<char> = word.chars().collect();
            let mut chunks = chars.chunks(width).peekable();
            while let Some(chunk) = chunks.next() {
                let piece: String = chunk.iter().collect();
                if chunks.peek().is_some() {
                    out.push(piece);
                } else {
                    current_len = chunk.len();
                    current = piece;
                }
            }
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            out.push(std::mem::replace(&mut current, word.to_string()));
            current_len = word_len;
        }
    }

    if !current.is_empty() || out.is_empty() {
        out.push(current);
    }
    out
}
