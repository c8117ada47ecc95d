/// A lone closing-scope marker: nothing on the line but a `}` and whitespace.
#[inline]
pub fn is_lone_close(line: &str) -> bool {
    line.trim() == "}"
}

#[inline]
fn is_quote(c: char) -> bool {
    matches!(c, '\'' | '"' | '`')
}

/// Net change in brace depth contributed by one line, ignoring braces inside
/// string literals and after a `//` line comment. Template-literal
/// interpolation (`${...}`) is not modeled; the sources this tool targets do
/// not nest braces inside strings that way.
pub fn brace_delta(line: &str) -> i32 {
    let mut delta = 0i32;
    let mut in_str: Option<char> = None;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match in_str {
            Some(q) => {
                if c == '\\' {
                    let _ = chars.next();
                } else if c == q {
                    in_str = None;
                }
            }
            None => match c {
                '{' => delta += 1,
                '}' => delta -= 1,
                '/' if chars.peek() == Some(&'/') => break,
                c if is_quote(c) => in_str = Some(c),
                _ => {}
            },
        }
    }
    delta
}

/// Leading whitespace of a line, used to indent synthesized replacements the
/// same way the line they replace was indented.
#[inline]
pub fn leading_ws(line: &str) -> &str {
    let end = line.len() - line.trim_start().len();
    &line[..end]
}
