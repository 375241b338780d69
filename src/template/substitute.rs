/// Replaces every occurrence of `marker` in `document` with `snippet`.
///
/// A marker that sits alone on its line (only whitespace around it) is
/// treated as a block: every snippet line is indented like the marker, and an
/// empty snippet removes the whole line. Markers embedded in other text are
/// replaced inline.
///
/// # Returns
/// * `(String, usize)` - The rewritten document and the number of occurrences replaced
pub fn substitute(document: &str, marker: &str, snippet: &str) -> (String, usize) {
    let (output, counts) = substitute_all(document, &[(marker, snippet)]);
    (output, counts[0])
}

/// Replaces every `(marker, snippet)` pair in a single pass over `document`.
///
/// Markers are only searched for in the original text, never inside a
/// snippet inserted earlier in the pass. When two markers start at the same
/// position the longer one wins.
///
/// # Returns
/// * `(String, Vec<usize>)` - The rewritten document and the occurrences
///   replaced for each pair, in the order given
pub fn substitute_all(document: &str, pairs: &[(&str, &str)]) -> (String, Vec<usize>) {
    let mut output = String::with_capacity(document.len());
    let mut counts = vec![0; pairs.len()];
    let mut cursor = 0;

    while let Some((index, pos)) = next_marker(document, cursor, pairs) {
        let (marker, snippet) = pairs[index];
        counts[index] += 1;
        let end = pos + marker.len();

        let line_start = document[..pos].rfind('\n').map_or(0, |i| i + 1);
        let indent = &document[line_start..pos];
        let line_end = document[end..].find('\n').map_or(document.len(), |i| end + i);
        let eol = if document[end..line_end].ends_with('\r') { line_end - 1 } else { line_end };
        let owns_line =
            indent.chars().all(char::is_whitespace) && document[end..eol].trim().is_empty();

        if !owns_line {
            output.push_str(&document[cursor..pos]);
            output.push_str(snippet);
            cursor = end;
        } else if snippet.is_empty() {
            output.push_str(&document[cursor..line_start]);
            cursor = (line_end + 1).min(document.len());
        } else {
            output.push_str(&document[cursor..pos]);
            push_indented(&mut output, snippet, indent);
            cursor = eol;
        }
    }

    output.push_str(&document[cursor..]);
    (output, counts)
}

/// Earliest marker at or after `cursor`, as `(pair index, absolute position)`.
fn next_marker(document: &str, cursor: usize, pairs: &[(&str, &str)]) -> Option<(usize, usize)> {
    pairs
        .iter()
        .enumerate()
        .filter(|(_, (marker, _))| !marker.is_empty())
        .filter_map(|(index, (marker, _))| {
            document[cursor..].find(marker).map(|found| (index, cursor + found))
        })
        .min_by_key(|&(index, pos)| (pos, std::cmp::Reverse(pairs[index].0.len())))
}

fn push_indented(output: &mut String, snippet: &str, indent: &str) {
    for (i, line) in snippet.lines().enumerate() {
        if i > 0 {
            output.push('\n');
            if !line.is_empty() {
                output.push_str(indent);
            }
        }
        output.push_str(line);
    }
}
