/// Makefile recognition by file name and extension.
use std::path::Path;

use crate::error::Error;

/// File names GNU make reads without `-f`.
const MAKEFILE_NAMES: [&str; 3] = ["GNUmakefile", "makefile", "Makefile"];

/// Extensions conventionally used for included or standalone makefiles.
const MAKEFILE_EXTENSIONS: [&str; 2] = ["make", "mk"];

/// Whether `path` names a Makefile.
pub fn is_makefile(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| return n.to_str()).unwrap_or("");
    if MAKEFILE_NAMES.contains(&name) {
        return true;
    }

    let ext = path.extension().and_then(|e| return e.to_str()).unwrap_or("");
    return MAKEFILE_EXTENSIONS.iter().any(|known| return known.eq_ignore_ascii_case(ext));
}

/// Accept `path` only if it names a Makefile.
///
/// # Errors
///
/// Returns `Error::UnsupportedDocument` for any other file.
pub fn require_makefile(path: &Path) -> Result<(), Error> {
    if is_makefile(path) {
        return Ok(());
    }
    return Err(Error::UnsupportedDocument { path: path.to_path_buf() });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conventional_names() {
        assert!(is_makefile(Path::new("Makefile")));
        assert!(is_makefile(Path::new("sub/dir/makefile")));
        assert!(is_makefile(Path::new("GNUmakefile")));
    }

    #[test]
    fn extensions() {
        assert!(is_makefile(Path::new("rules.mk")));
        assert!(is_makefile(Path::new("build/common.make")));
        assert!(is_makefile(Path::new("RULES.MK")));
    }

    #[test]
    fn other_files() {
        assert!(!is_makefile(Path::new("Makefile.am")));
        assert!(!is_makefile(Path::new("CMakeLists.txt")));
        assert!(!is_makefile(Path::new("build.sh")));
        assert!(matches!(
            require_makefile(Path::new("justfile")),
            Err(Error::UnsupportedDocument { .. })
        ));
    }
}
