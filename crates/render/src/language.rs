use std::path::Path;

/// Extension (lower-case, without the dot) to fence tag.
const LANGUAGE_HINTS: &[(&str, &str)] = &[
    ("py", "python"),
    ("js", "javascript"),
    ("ts", "typescript"),
    ("jsx", "jsx"),
    ("tsx", "tsx"),
    ("java", "java"),
    ("c", "c"),
    ("cpp", "cpp"),
    ("cs", "csharp"),
    ("php", "php"),
    ("rb", "ruby"),
    ("go", "go"),
    ("rs", "rust"),
    ("kt", "kotlin"),
    ("swift", "swift"),
    ("m", "objectivec"),
    ("scala", "scala"),
    ("sh", "bash"),
    ("bash", "bash"),
    ("zsh", "zsh"),
    ("fish", "fish"),
    ("ps1", "powershell"),
    ("r", "r"),
    ("sql", "sql"),
    ("html", "html"),
    ("htm", "html"),
    ("xml", "xml"),
    ("css", "css"),
    ("scss", "scss"),
    ("sass", "sass"),
    ("less", "less"),
    ("json", "json"),
    ("yaml", "yaml"),
    ("yml", "yaml"),
    ("toml", "toml"),
    ("ini", "ini"),
    ("cfg", "ini"),
    ("conf", "conf"),
    ("md", "markdown"),
    ("markdown", "markdown"),
    ("rst", "rst"),
    ("tex", "latex"),
];

/// Returns the fence tag for `path`, or `""` when the extension is unknown.
///
/// Only the final path component is considered and the extension is compared
/// case-insensitively. Names such as `.bashrc` have no extension.
#[must_use]
pub fn language_hint(path: &Path) -> &'static str {
    let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
        return "";
    };
    let extension = extension.to_ascii_lowercase();
    LANGUAGE_HINTS
        .iter()
        .find(|(known, _)| *known == extension)
        .map_or("", |(_, tag)| tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_entry_resolves() {
        for (extension, tag) in LANGUAGE_HINTS {
            let name = format!("file.{extension}");
            assert_eq!(language_hint(Path::new(&name)), *tag, "{name}");
        }
    }

    #[test]
    fn table_has_no_duplicate_extensions() {
        let mut seen: Vec<_> = LANGUAGE_HINTS.iter().map(|(ext, _)| *ext).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), LANGUAGE_HINTS.len());
    }

    #[test]
    fn extension_is_case_insensitive() {
        assert_eq!(language_hint(Path::new("Main.RS")), "rust");
        assert_eq!(language_hint(Path::new("INDEX.Html")), "html");
    }

    #[test]
    fn only_final_extension_counts() {
        assert_eq!(language_hint(Path::new("archive.tar.gz")), "");
        assert_eq!(language_hint(Path::new("types.d.ts")), "typescript");
        assert_eq!(language_hint(Path::new("dir.py/notes")), "");
    }

    #[test]
    fn unknown_or_missing_extension_is_untagged() {
        assert_eq!(language_hint(Path::new("Makefile")), "");
        assert_eq!(language_hint(Path::new(".bashrc")), "");
        assert_eq!(language_hint(Path::new("notes.txt")), "");
        assert_eq!(language_hint(Path::new("trailing.")), "");
    }
}
