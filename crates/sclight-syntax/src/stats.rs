//! Line-oriented source statistics.

/// Line counts for an analyzed snippet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceStats {
    /// Total number of lines.
    pub total_lines: usize,
    /// Lines carrying code (possibly with a trailing comment).
    pub code_lines: usize,
    /// Lines consisting only of comment text.
    pub comment_lines: usize,
    /// Blank or whitespace-only lines.
    pub empty_lines: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Empty,
    Comment,
    Code,
}

/// Computes line statistics for a snippet.
///
/// Block comments may span lines; a line is a comment line only when it
/// contains no code outside comment spans.
#[must_use]
pub fn source_stats(source: &str) -> SourceStats {
    let mut stats = SourceStats::default();
    let mut depth = 0usize;

    for line in source.lines() {
        stats.total_lines += 1;
        match scan_line(line, &mut depth) {
            LineKind::Empty => stats.empty_lines += 1,
            LineKind::Comment => stats.comment_lines += 1,
            LineKind::Code => stats.code_lines += 1,
        }
    }

    stats
}

fn scan_line(line: &str, depth: &mut usize) -> LineKind {
    let bytes = line.as_bytes();
    let mut i = 0usize;
    let mut found_code = false;
    let mut found_comment = *depth > 0;

    while i < bytes.len() {
        if *depth > 0 {
            if i + 1 < bytes.len() && (&bytes[i..i + 2] == b"*)" || &bytes[i..i + 2] == b"*/") {
                *depth -= 1;
                i += 2;
            } else if i + 1 < bytes.len() && (&bytes[i..i + 2] == b"(*" || &bytes[i..i + 2] == b"/*")
            {
                *depth += 1;
                i += 2;
            } else {
                i += 1;
            }
            continue;
        }
        let rest = &bytes[i..];
        if bytes[i].is_ascii_whitespace() {
            i += 1;
        } else if rest.starts_with(b"//") {
            found_comment = true;
            break;
        } else if rest.starts_with(b"(*") || rest.starts_with(b"/*") {
            found_comment = true;
            *depth += 1;
            i += 2;
        } else if bytes[i] == b'\'' {
            found_code = true;
            i += 1;
            while i < bytes.len() && bytes[i] != b'\'' {
                i += if bytes[i] == b'$' { 2 } else { 1 };
            }
            i += 1;
        } else {
            found_code = true;
            i += 1;
        }
    }

    if found_code {
        LineKind::Code
    } else if found_comment {
        LineKind::Comment
    } else {
        LineKind::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_basic_lines() {
        let source = "// cabeçalho\n\nMotor := TRUE; // liga\n(* bloco\nainda bloco *)\nX := 1;";
        let stats = source_stats(source);
        assert_eq!(stats.total_lines, 6);
        assert_eq!(stats.empty_lines, 1);
        assert_eq!(stats.comment_lines, 3);
        assert_eq!(stats.code_lines, 2);
    }

    #[test]
    fn code_after_block_close_counts_as_code() {
        let stats = source_stats("(* a *) X := 1;");
        assert_eq!(stats.code_lines, 1);
        assert_eq!(stats.comment_lines, 0);
    }

    #[test]
    fn empty_source() {
        assert_eq!(source_stats(""), SourceStats::default());
    }
}
