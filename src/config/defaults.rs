//! Built-in defaults for the scanning configuration.

pub const DEFAULT_INPUT_DIR: &str = "input";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_SUFFIX: &str = "_project_code.txt";

/// 2 MiB. Files above this are represented as oversized placeholders.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 2_097_152;

/// Flat-listing cap used when tree rendering is unavailable.
pub const FLAT_LISTING_MAX_LINES: usize = 500;

/// Extensions whose content is rendered into reports.
pub fn included_extensions() -> Vec<String> {
    [
        // Web frontend
        ".js", ".jsx", ".mjs", ".ts", ".tsx", ".html", ".css", ".scss",
        // Backend
        ".py", ".rs", ".go", ".rb", ".c", ".h", ".cpp", ".hpp", ".java",
        // Data and configuration
        ".json", ".toml", ".yaml", ".yml", ".cfg", ".ini",
        // Docs and diagrams
        ".md", ".rst", ".puml", ".mermaid",
        // Scripts
        ".sh", ".bash", ".sql",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Well-known configuration filenames that qualify regardless of extension.
pub fn included_config_files() -> Vec<String> {
    [
        "package.json",
        "tsconfig.json",
        "tsconfig.build.json",
        "nest-cli.json",
        "eslint.config.js",
        "vite.config.js",
        "pyproject.toml",
        "setup.py",
        "setup.cfg",
        "requirements.txt",
        "manage.py",
        "Pipfile",
        "Makefile",
        "Dockerfile",
        "CMakeLists.txt",
        "*.cmake",
        // Env files qualify as candidates by name so that skipping them
        // shows up in the stats; the default file exclusions reject them
        // before any content is read.
        ".env",
        ".env.*",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// File-name globs excluded by default: lockfiles, secrets, VCS noise.
pub fn excluded_file_patterns() -> Vec<String> {
    [
        ".env",
        ".env.*",
        ".gitignore",
        ".gitattributes",
        "package-lock.json",
        "yarn.lock",
        "pnpm-lock.yaml",
        "Pipfile.lock",
        "poetry.lock",
        "Cargo.lock",
        "*.min.js",
        "*.min.css",
        "*.pyc",
        "*.lock",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Directory-name globs pruned by default before traversal descends.
pub fn excluded_dir_patterns() -> Vec<String> {
    [
        "node_modules",
        ".git",
        ".hg",
        ".svn",
        "dist",
        "build",
        "out",
        "target",
        "__pycache__",
        ".venv",
        "venv",
        ".idea",
        ".vscode",
        ".pytest_cache",
        ".mypy_cache",
        ".tox",
        "htmlcov",
        "coverage",
        ".cache",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
