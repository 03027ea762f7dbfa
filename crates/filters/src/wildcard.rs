//! Translation of shell wildcards into `globset` syntax.
//!
//! Shell wildcards accept every string: an unclosed `[` is a literal, braces
//! and backslashes carry no meaning, and a reversed range such as `z-a`
//! contributes nothing to its class. `globset` rejects or reinterprets those
//! forms, so patterns are rewritten before compilation.

/// Rewrites a shell wildcard as an equivalent `globset` glob.
///
/// Returns `None` when the pattern can never match because one of its
/// character classes is empty after dropping reversed ranges.
pub(crate) fn translate(pattern: &str) -> Option<String> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut glob = String::with_capacity(pattern.len() + 8);
    let mut index = 0;

    while index < chars.len() {
        match chars[index] {
            // Runs of `*` collapse so `**` never takes its recursive meaning.
            '*' if glob.ends_with('*') => {}
            '*' => glob.push('*'),
            '?' => glob.push('?'),
            '[' => match class_end(&chars, index + 1) {
                Some(end) => {
                    glob.push_str(&Class::parse(&chars[index + 1..end]).render()?);
                    index = end;
                }
                None => glob.push_str("[[]"),
            },
            c => push_literal(&mut glob, c),
        }
        index += 1;
    }

    Some(glob)
}

fn push_literal(glob: &mut String, c: char) {
    match c {
        '[' => glob.push_str("[[]"),
        ']' => glob.push_str("[]]"),
        '{' => glob.push_str("[{]"),
        '}' => glob.push_str("[}]"),
        other => glob.push(other),
    }
}

/// Index of the `]` closing a class whose body starts at `start`.
///
/// A `]` directly after the opening bracket (or after `[!`) belongs to the
/// body.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut index = start;
    if chars.get(index) == Some(&'!') {
        index += 1;
    }
    if chars.get(index) == Some(&']') {
        index += 1;
    }
    chars
        .get(index..)?
        .iter()
        .position(|&c| c == ']')
        .map(|offset| index + offset)
}

#[derive(Debug, Eq, PartialEq)]
struct Class {
    negated: bool,
    /// Sorted, non-overlapping inclusive ranges.
    ranges: Vec<(char, char)>,
}

impl Class {
    fn parse(body: &[char]) -> Self {
        let (negated, body) = match body.split_first() {
            Some(('!', rest)) => (true, rest),
            _ => (false, body),
        };

        let mut ranges = Vec::new();
        let mut index = 0;
        while index < body.len() {
            let low = body[index];
            if body.get(index + 1) == Some(&'-') && index + 2 < body.len() {
                let high = body[index + 2];
                if low <= high {
                    ranges.push((low, high));
                }
                index += 3;
            } else {
                ranges.push((low, low));
                index += 1;
            }
        }

        Self {
            negated,
            ranges: merge(ranges),
        }
    }

    fn render(&self) -> Option<String> {
        if self.ranges.is_empty() {
            // `[!]`-style classes with nothing left match any one character.
            return self.negated.then(|| "?".to_owned());
        }
        render_set(self.negated, &self.ranges)
            .or_else(|| render_set(true, &complement(&self.ranges)))
    }
}

/// Writes `ranges` as a `globset` class.
///
/// `]` must come first and `-` first or last, and a leading `!` or `^`
/// would read as negation. Returns `None` when a non-negated set cannot be
/// ordered to satisfy that.
fn render_set(negated: bool, ranges: &[(char, char)]) -> Option<String> {
    let (ranges, bracket) = take_char(ranges, ']', '\\', '^');
    let (mut ranges, dash) = take_char(&ranges, '-', ',', '.');

    let opens_negation = |&(low, _): &(char, char)| low == '!' || low == '^';
    if let Some(position) = ranges.iter().position(|range| !opens_negation(range)) {
        ranges[..=position].rotate_right(1);
    }
    let dash_first = !negated && !bracket && ranges.first().is_some_and(opens_negation);
    if dash_first && !dash {
        return None;
    }

    let mut class = String::from("[");
    if negated {
        class.push('!');
    }
    if bracket {
        class.push(']');
    }
    if dash_first {
        class.push('-');
    }
    for &(low, high) in &ranges {
        class.push(low);
        if high != low {
            class.push('-');
            class.push(high);
        }
    }
    if dash && !dash_first {
        class.push('-');
    }
    class.push(']');
    Some(class)
}

/// Removes `special` from every range, reporting whether it was present.
fn take_char(
    ranges: &[(char, char)],
    special: char,
    before: char,
    after: char,
) -> (Vec<(char, char)>, bool) {
    let mut found = false;
    let mut kept = Vec::with_capacity(ranges.len() + 1);
    for &(low, high) in ranges {
        if low <= special && special <= high {
            found = true;
            if low < special {
                kept.push((low, before));
            }
            if special < high {
                kept.push((after, high));
            }
        } else {
            kept.push((low, high));
        }
    }
    (kept, found)
}

fn merge(mut ranges: Vec<(char, char)>) -> Vec<(char, char)> {
    ranges.sort_unstable();
    let mut merged: Vec<(char, char)> = Vec::with_capacity(ranges.len());
    for (low, high) in ranges {
        match merged.last_mut() {
            Some(last) if next_char(last.1).is_none_or(|next| low <= next) => {
                last.1 = last.1.max(high);
            }
            _ => merged.push((low, high)),
        }
    }
    merged
}

fn complement(ranges: &[(char, char)]) -> Vec<(char, char)> {
    let mut result = Vec::new();
    let mut start = Some('\0');
    for &(low, high) in ranges {
        if let Some(from) = start
            && from < low
            && let Some(to) = prev_char(low)
        {
            result.push((from, to));
        }
        start = next_char(high);
    }
    if let Some(from) = start {
        result.push((from, char::MAX));
    }
    result
}

fn next_char(c: char) -> Option<char> {
    match c {
        '\u{D7FF}' => Some('\u{E000}'),
        char::MAX => None,
        _ => char::from_u32(u32::from(c) + 1),
    }
}

fn prev_char(c: char) -> Option<char> {
    match c {
        '\u{E000}' => Some('\u{D7FF}'),
        '\0' => None,
        _ => char::from_u32(u32::from(c) - 1),
    }
}
