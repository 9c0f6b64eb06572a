//! C symbol names derived from font file paths.

use fontconvert_core::CodeRange;

/// File name of `font_path` with spaces turned into underscores and the
/// extension removed.
///
/// Both `/` and `\` count as path separators, whatever the host platform.
#[must_use]
pub fn base_name(font_path: &str) -> String {
    let file = font_path
        .rfind(['/', '\\'])
        .map_or(font_path, |i| &font_path[i + 1..]);
    let file = file.replace(' ', "_");
    match file.rfind('.') {
        Some(dot) => file[..dot].to_owned(),
        None => file,
    }
}

/// Full symbol name, e.g. `FreeSans18pt7b`.
///
/// The suffix is `8b` once `range` leaves 7-bit ASCII.
#[must_use]
pub fn symbol_name(font_path: &str, size: u32, range: CodeRange) -> String {
    let bits = if range.is_extended() { 8 } else { 7 };
    format!("{}{size}pt{bits}b", base_name(font_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_directories_and_extension() {
        assert_eq!(base_name("/usr/share/fonts/FreeSans.ttf"), "FreeSans");
        assert_eq!(base_name("C:\\Fonts\\Arial Bold.otf"), "Arial_Bold");
        assert_eq!(base_name("fonts/win\\mixed/Tiny.ttf"), "Tiny");
    }

    #[test]
    fn only_last_extension_is_dropped() {
        assert_eq!(base_name("My Font.v2.ttf"), "My_Font.v2");
        assert_eq!(base_name("NoExtension"), "NoExtension");
    }

    #[test]
    fn ascii_range_is_seven_bits() {
        assert_eq!(
            symbol_name("FreeSans.ttf", 18, CodeRange::default()),
            "FreeSans18pt7b"
        );
        assert_eq!(
            symbol_name("FreeSans.ttf", 9, CodeRange::new(0x20, 127)),
            "FreeSans9pt7b"
        );
    }

    #[test]
    fn extended_range_is_eight_bits() {
        assert_eq!(
            symbol_name("dir/Free Mono.ttf", 12, CodeRange::new(0x20, 0xFF)),
            "Free_Mono12pt8b"
        );
        assert_eq!(
            symbol_name("Mono.ttf", 12, CodeRange::new(0xA0, 0x20)),
            "Mono12pt8b",
            "reversed endpoints are normalized first"
        );
    }
}
