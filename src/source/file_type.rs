//! File-type classification by extension.

use std::path::Path;

use crate::ui::Style;

/// Label for extensions missing from [`FILE_TYPES`].
pub const UNKNOWN_FILE_TYPE: &str = "unknown";

/// Known file extensions (lower-case, without the dot) and their labels.
pub const FILE_TYPES: &[(&str, &str)] = &[
    ("c", "C"),
    ("cpp", "C++"),
    ("cs", "C#"),
    ("css", "CSS"),
    ("go", "Go"),
    ("html", "HTML"),
    ("java", "Java"),
    ("js", "JavaScript"),
    ("json", "JSON"),
    ("kt", "Kotlin"),
    ("md", "Markdown"),
    ("php", "PHP"),
    ("py", "Python"),
    ("rb", "Ruby"),
    ("rs", "Rust"),
    ("sh", "Shell"),
    ("sql", "SQL"),
    ("swift", "Swift"),
    ("ts", "TypeScript"),
    ("txt", "text"),
    ("xml", "XML"),
    ("yaml", "YAML"),
    ("yml", "YAML"),
];

/// Returns the label for `path`'s extension, or [`UNKNOWN_FILE_TYPE`].
///
/// The extension is whatever follows the last `.` of the file name,
/// compared case-insensitively. A leading dot counts, so `.py` is Python.
pub fn classify(path: impl AsRef<Path>) -> &'static str {
    path.as_ref()
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .and_then(|ext| {
            FILE_TYPES
                .iter()
                .find(|(known, _)| *known == ext)
                .map(|(_, label)| *label)
        })
        .unwrap_or(UNKNOWN_FILE_TYPE)
}

/// Prints the extension table to stdout.
pub fn print_file_types() {
    println!("{}", Style::header("Recognized file extensions"));
    for (ext, label) in FILE_TYPES {
        println!("  {:6} {}", Style::code(format!(".{ext}")), Style::secondary(label));
    }
    println!(
        "\n{}",
        Style::hint(format!("Other extensions are labeled '{UNKNOWN_FILE_TYPE}'."))
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_every_table_entry() {
        for (ext, label) in FILE_TYPES {
            assert_eq!(classify(format!("src/sample.{ext}")), *label, "ext {ext}");
        }
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("Main.PY"), "Python");
        assert_eq!(classify("lib.Rs"), "Rust");
    }

    #[test]
    fn test_classify_plain_text() {
        assert_eq!(classify("notes.txt"), "text");
    }

    #[test]
    fn test_classify_unknown_extension() {
        assert_eq!(classify("diagram.svg"), UNKNOWN_FILE_TYPE);
        assert_eq!(classify("archive.tar.gz"), UNKNOWN_FILE_TYPE);
    }

    #[test]
    fn test_classify_missing_extension() {
        assert_eq!(classify("Makefile"), UNKNOWN_FILE_TYPE);
        assert_eq!(classify(".bashrc"), UNKNOWN_FILE_TYPE);
        assert_eq!(classify(""), UNKNOWN_FILE_TYPE);
    }

    #[test]
    fn test_classify_dot_only_name() {
        assert_eq!(classify(".py"), "Python");
        assert_eq!(classify("scripts/.rs"), "Rust");
        assert_eq!(classify("dir.v2/Makefile"), UNKNOWN_FILE_TYPE);
    }

    #[test]
    fn test_classify_uses_last_extension() {
        assert_eq!(classify("config.backup.json"), "JSON");
        assert_eq!(classify("release.v2/build.sh"), "Shell");
    }

    #[test]
    fn test_table_keys_are_lowercase_and_unique() {
        for (i, (ext, _)) in FILE_TYPES.iter().enumerate() {
            assert_eq!(*ext, ext.to_ascii_lowercase());
            assert!(!FILE_TYPES[i + 1..].iter().any(|(other, _)| other == ext));
        }
    }
}
