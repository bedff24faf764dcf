use std::path::PathBuf;

/// Where the rc file lives, and whether the user named it explicitly.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub rc_path: Option<PathBuf>,
    pub explicit: bool,
}

impl ConfigPaths {
    pub fn new(explicit: Option<&str>) -> Self {
        match explicit {
            Some(path) => ConfigPaths {
                rc_path: Some(PathBuf::from(path)),
                explicit: true,
            },
            None => ConfigPaths {
                rc_path: dirs::home_dir().map(|home| home.join(".myshellrc")),
                explicit: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path() {
        let paths = ConfigPaths::new(Some("/etc/myshellrc"));
        assert_eq!(paths.rc_path, Some(PathBuf::from("/etc/myshellrc")));
        assert!(paths.explicit);
    }

    #[test]
    fn test_default_path_is_in_home() {
        let paths = ConfigPaths::new(None);
        assert!(!paths.explicit);
        if let Some(path) = paths.rc_path {
            assert!(path.ends_with(".myshellrc"));
        }
    }
}
