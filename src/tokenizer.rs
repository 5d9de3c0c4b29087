//! Splits raw input into logical lines for block matching.

/// One logical line of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Line text without its terminator
    pub text: &'a str,
    /// Byte offset of the line start in the original input
    pub offset: usize,
    /// 0-based line index
    pub index: usize,
}

impl<'a> Line<'a> {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Byte offset one past the last byte of the line text.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// Split `input` into lines. `\r\n`, `\r` and `\n` all terminate a line.
///
/// Blank lines are kept; a terminator at the very end does not produce an
/// extra empty line.
pub fn tokenize(input: &str) -> Vec<Line<'_>> {
    let bytes = input.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'\n' => {
                push_line(&mut lines, input, start, pos);
                pos += 1;
                start = pos;
            }
            b'\r' => {
                push_line(&mut lines, input, start, pos);
                pos += if bytes.get(pos + 1) == Some(&b'\n') { 2 } else { 1 };
                start = pos;
            }
            _ => pos += 1,
        }
    }

    if start < bytes.len() {
        push_line(&mut lines, input, start, bytes.len());
    }

    log::trace!("Tokenized {} bytes into {} lines", input.len(), lines.len());
    lines
}

fn push_line<'a>(lines: &mut Vec<Line<'a>>, input: &'a str, start: usize, end: usize) {
    let index = lines.len();
    lines.push(Line {
        text: &input[start..end],
        offset: start,
        index,
    });
}

/// Join line texts with `\n`.
pub fn join_lines(lines: &[Line<'_>]) -> String {
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(line.text);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<&str> {
        tokenize(input).iter().map(|l| l.text).collect()
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn splits_on_all_line_endings() {
        assert_eq!(texts("a\nb\r\nc\rd"), ["a", "b", "c", "d"]);
    }

    #[test]
    fn keeps_blank_lines() {
        assert_eq!(texts("a\n\n\nb"), ["a", "", "", "b"]);
    }

    #[test]
    fn trailing_newline_adds_no_line() {
        assert_eq!(texts("a\n"), ["a"]);
        assert_eq!(texts("a\n\n"), ["a", ""]);
    }

    #[test]
    fn offsets_point_into_original() {
        let input = "ab\r\ncd\nef";
        let lines = tokenize(input);
        for line in &lines {
            assert_eq!(&input[line.offset..line.end()], line.text);
        }
        assert_eq!(lines[1].offset, 4);
        assert_eq!(lines[2].index, 2);
    }

    #[test]
    fn join_normalizes_endings() {
        let lines = tokenize("a\r\nb\rc");
        assert_eq!(join_lines(&lines), "a\nb\nc");
    }
}
