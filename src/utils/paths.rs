//! Path normalization

pub fn normalize_path(path: &str) -> String {
    // Convert backslashes to forward slashes so reports look the same on
    // every platform.
    path.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::normalize_path;

    #[test]
    fn backslashes_become_forward_slashes() {
        assert_eq!(normalize_path(r"src\app\main.py"), "src/app/main.py");
        assert_eq!(normalize_path("src/app/main.py"), "src/app/main.py");
    }
}
