/// Explicit concatenation operator.
pub(crate) const CONCAT: char = '.';

/// Makes implicit concatenation explicit: `(a|b)*c` becomes `(a|b)*.c`.
pub(crate) fn expand(expr: &str) -> String {
    let mut out = String::with_capacity(expr.len() * 2);
    let mut stream = expr.chars().peekable();

    while let Some(c) = stream.next() {
        out.push(c);

        if c == '(' || c == '|' {
            continue;
        }
        if let Some(next) = stream.peek() {
            if !matches!(next, ')' | '|' | '*') {
                out.push(CONCAT);
            }
        }
    }

    out
}
