//! C string-array literal of ROM names
//!
//! The menu program declares something like
//! `const char roms[][40] = {"ant    ...", "zed    ..."};` and prints each
//! entry as a fixed-width menu line, so names are padded to a common width
//! by default.

use crate::discovery::RomSet;

/// Default name width: 39 characters plus the C terminator fills a 40-byte row.
pub const DEFAULT_NAME_WIDTH: usize = 39;

/// Menu name for a ROM file: extension stripped, then padded with spaces or
/// truncated to `width` characters. `None` leaves the name as is.
pub fn rom_display_name(file_name: &str, ext: &str, width: Option<usize>) -> String {
    let suffix = format!(".{}", ext);
    let stem = file_name.strip_suffix(&suffix).unwrap_or(file_name);

    match width {
        Some(width) => {
            let mut name: String = stem.chars().take(width).collect();
            let len = name.chars().count();
            name.extend(std::iter::repeat_n(' ', width - len));
            name
        }
        None => stem.to_string(),
    }
}

/// Build `{"a", "b"};\n` from the given names.
pub fn names_literal<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let escaped: Vec<String> = names
        .into_iter()
        .map(|name| escape_c_string(name.as_ref()))
        .collect();
    format!("{{\"{}\"}};\n", escaped.join("\", \""))
}

/// Literal for every ROM of `roms`, in set order.
pub fn rom_set_literal(roms: &RomSet, ext: &str, width: Option<usize>) -> String {
    names_literal(
        roms.file_names()
            .map(|file_name| rom_display_name(file_name, ext, width)),
    )
}

fn escape_c_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out
}
