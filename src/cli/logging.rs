use tracing::Level;

/// `--verbose` shows per-step progress; otherwise only warnings and errors.
pub fn max_level(verbose: bool) -> Level {
    if verbose {
        Level::INFO
    } else {
        Level::WARN
    }
}

pub fn init(verbose: bool) {
    tracing_subscriber::fmt()
        .with_max_level(max_level(verbose))
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_enables_progress_logs() {
        assert_eq!(max_level(true), Level::INFO);
        assert_eq!(max_level(false), Level::WARN);
    }
}
