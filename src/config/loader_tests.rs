use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::*;
use crate::figures::FigureKind;

struct MockFileSystem {
    files: Mutex<HashMap<PathBuf, String>>,
    current_dir: PathBuf,
    config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
            current_dir: PathBuf::from("/project"),
            config_dir: Some(PathBuf::from("/home/user/.config/review-figures")),
        }
    }

    fn with_file(self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.to_string());
        self
    }

    fn with_config_dir(mut self, path: Option<PathBuf>) -> Self {
        self.config_dir = path;
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}

mod discovery_tests {
    use super::*;

    #[test]
    fn returns_default_when_no_config_found() {
        let loader = FileConfigLoader::with_fs(MockFileSystem::new());
        let config = loader.load().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn loads_local_config_from_current_directory() {
        let fs = MockFileSystem::new().with_file(
            "/project/.review-figures.toml",
            "[validation]\ngrowth_tolerance = 2.0\n",
        );
        let config = FileConfigLoader::with_fs(fs).load().unwrap();
        assert!((config.validation.growth_tolerance - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn loads_user_config_as_fallback() {
        let fs = MockFileSystem::new().with_file(
            "/home/user/.config/review-figures/config.toml",
            "[figures]\ntop_growth = 5\n",
        );
        let config = FileConfigLoader::with_fs(fs).load().unwrap();
        assert_eq!(config.figures.top_growth, 5);
    }

    #[test]
    fn local_config_wins_over_user_config() {
        let fs = MockFileSystem::new()
            .with_file("/project/.review-figures.toml", "[figures]\ntop_growth = 2\n")
            .with_file(
                "/home/user/.config/review-figures/config.toml",
                "[figures]\ntop_growth = 7\n",
            );
        let config = FileConfigLoader::with_fs(fs).load().unwrap();
        assert_eq!(config.figures.top_growth, 2);
    }

    #[test]
    fn missing_config_dir_falls_back_to_default() {
        let fs = MockFileSystem::new().with_config_dir(None);
        let config = FileConfigLoader::with_fs(fs).load().unwrap();
        assert_eq!(config.figures.top_growth, 3);
    }
}

mod parsing_tests {
    use super::*;

    #[test]
    fn load_from_path_reads_given_file() {
        let fs = MockFileSystem::new().with_file(
            "/elsewhere/custom.toml",
            "version = \"1\"\n[figures]\nenabled = [\"growth_rate\", \"prisma_flow\"]\n",
        );
        let config = FileConfigLoader::with_fs(fs)
            .load_from_path(Path::new("/elsewhere/custom.toml"))
            .unwrap();
        assert_eq!(
            config.figures.enabled,
            [FigureKind::GrowthRate, FigureKind::PrismaFlow]
        );
    }

    #[test]
    fn load_from_missing_path_is_file_access_error() {
        let err = FileConfigLoader::with_fs(MockFileSystem::new())
            .load_from_path(Path::new("/nope.toml"))
            .unwrap_err();
        assert!(matches!(err, ReviewError::FileAccess { .. }));
    }

    #[test]
    fn rejects_unsupported_version() {
        let fs = MockFileSystem::new().with_file("/project/.review-figures.toml", "version = \"9\"\n");
        let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
        assert!(err.to_string().contains("Unsupported config version '9'"));
    }

    #[test]
    fn rejects_invalid_toml() {
        let fs = MockFileSystem::new().with_file("/project/.review-figures.toml", "[figures\n");
        let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
        assert!(matches!(err, ReviewError::TomlParse(_)));
    }

    #[test]
    fn rejects_misspelled_tolerance_key() {
        let fs = MockFileSystem::new().with_file(
            "/project/.review-figures.toml",
            "[validation]\ngrowth_tolerence = 0.1\n",
        );
        let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
        assert!(matches!(err, ReviewError::TomlParse(_)));
        assert!(err.to_string().contains("growth_tolerence"));
    }

    #[test]
    fn rejects_negative_tolerance() {
        let fs = MockFileSystem::new().with_file(
            "/project/.review-figures.toml",
            "[validation]\npercent_tolerance = -0.5\n",
        );
        let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
        assert!(err.to_string().contains("percent_tolerance"));
    }

    #[test]
    fn relative_dataset_path_resolves_against_config_dir() {
        let fs = MockFileSystem::new().with_file(
            "/project/.review-figures.toml",
            "[dataset]\npath = \"data/review.toml\"\n",
        );
        let config = FileConfigLoader::with_fs(fs).load().unwrap();
        assert_eq!(
            config.dataset.path,
            Some(PathBuf::from("/project/data/review.toml"))
        );
    }

    #[test]
    fn absolute_dataset_path_is_kept() {
        let fs = MockFileSystem::new().with_file(
            "/project/.review-figures.toml",
            "[dataset]\npath = \"/srv/review.toml\"\n",
        );
        let config = FileConfigLoader::with_fs(fs).load().unwrap();
        assert_eq!(config.dataset.path, Some(PathBuf::from("/srv/review.toml")));
    }
}
