use std::path::{Path, PathBuf};

/// Expands a leading `~` to the user's home directory.
#[derive(Debug, Clone)]
pub struct PathExpander {
    home: Option<PathBuf>,
}

impl Default for PathExpander {
    fn default() -> Self {
        Self::new()
    }
}

impl PathExpander {
    pub fn new() -> Self {
        Self {
            home: dirs::home_dir(),
        }
    }

    /// `~` and `~/rest` are rewritten; `~user` forms and paths without a
    /// home directory are returned untouched.
    pub fn expand(&self, path: &str) -> PathBuf {
        match (&self.home, path) {
            (Some(home), "~") => home.clone(),
            (Some(home), _) if path.starts_with("~/") => {
                let mut expanded = home.clone();
                for part in path[2..].split('/').filter(|part| !part.is_empty()) {
                    expanded.push(part);
                }
                expanded
            }
            _ => Path::new(path).to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expander(home: &str) -> PathExpander {
        PathExpander {
            home: Some(PathBuf::from(home)),
        }
    }

    #[test]
    fn test_expand_home() {
        let expander = expander("/home/user");
        assert_eq!(expander.expand("~"), PathBuf::from("/home/user"));
        assert_eq!(
            expander.expand("~/docs//notes"),
            PathBuf::from("/home/user/docs/notes")
        );
    }

    #[test]
    fn test_leaves_other_paths() {
        let expander = expander("/home/user");
        assert_eq!(expander.expand("src/lib.rs"), PathBuf::from("src/lib.rs"));
        assert_eq!(expander.expand("~other/x"), PathBuf::from("~other/x"));
    }
}
