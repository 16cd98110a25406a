/// Connector for an entry with further siblings below it.
const BRANCH: &str = "├───";
/// Connector for the last entry at its level.
const BRANCH_LAST: &str = "└───";
/// Prefix continuation carried to children of a non-last entry.
const CONTINUE: &str = "│\t";
/// Prefix continuation carried to children of the last entry.
const CONTINUE_LAST: &str = "\t";

/// Render a single entry line and the prefix its children inherit.
///
/// `size` is `Some` for files and `None` for directories. A 0-byte file is
/// annotated `(empty)`, any other file `(<n>b)`. The returned line includes
/// its trailing newline.
pub(crate) fn format_line(
    name: &str,
    size: Option<u64>,
    prefix: &str,
    is_last: bool,
) -> (String, String) {
    let (connector, continuation) = if is_last {
        (BRANCH_LAST, CONTINUE_LAST)
    } else {
        (BRANCH, CONTINUE)
    };

    let mut line = format!("{}{}{}", prefix, connector, name);
    match size {
        Some(0) => line.push_str(" (empty)"),
        Some(n) => line.push_str(&format!(" ({}b)", n)),
        None => {}
    }
    line.push('\n');

    let child_prefix = format!("{}{}", prefix, continuation);

    (line, child_prefix)
}
