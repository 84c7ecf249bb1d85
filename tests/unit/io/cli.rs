//! Tests for command-line parsing and the file runner

#[cfg(test)]
mod tests {
    use crate::support::{diagonal_image, encode, solid_image};
    use clap::Parser;
    use image::ImageFormat;
    use imgsmlr::FingerprintError;
    use imgsmlr::io::cli::{Cli, Command, Runner, collect_images, has_supported_extension};
    use imgsmlr::io::configuration::DEFAULT_PRECISION;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn run(args: &[&str]) -> (Result<(), FingerprintError>, String) {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        let mut out = Vec::new();
        let result = Runner::new(cli).run(&mut out);
        (result, String::from_utf8(out).unwrap())
    }

    fn image_directory() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("diagonal.png"),
            encode(&diagonal_image(64), ImageFormat::Png),
        )
        .unwrap();
        fs::write(
            dir.path().join("solid.png"),
            encode(&solid_image(32, 32, [200, 10, 10]), ImageFormat::Png),
        )
        .unwrap();
        fs::write(dir.path().join("corrupt.gif"), b"GIF89a truncated").unwrap();
        fs::write(dir.path().join("notes.txt"), "not an image").unwrap();
        dir
    }

    fn path_arg(path: &Path) -> &str {
        path.to_str().unwrap()
    }

    // Tests parsing with only the required arguments
    // Verified by changing the default precision
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["imgsmlr", "fingerprint", "photo.png"]);

        assert_eq!(cli.precision, DEFAULT_PRECISION);
        assert!(!cli.verbose);
        assert_eq!(
            cli.command,
            Command::Fingerprint {
                target: PathBuf::from("photo.png"),
                pattern: false,
                quiet: false,
            }
        );
    }

    // Tests global flags are accepted after the subcommand
    // Verified by dropping the global attribute
    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::parse_from(["imgsmlr", "compare", "a.jpg", "b.jpg", "-p", "3", "-v"]);

        assert_eq!(cli.precision, 3);
        assert!(cli.verbose);
        assert_eq!(
            cli.command,
            Command::Compare {
                first: PathBuf::from("a.jpg"),
                second: PathBuf::from("b.jpg"),
            }
        );
    }

    // Tests missing subcommand arguments are parse errors
    // Verified by making the second image optional
    #[test]
    fn test_cli_missing_arguments() {
        assert!(Cli::try_parse_from(["imgsmlr", "compare", "a.jpg"]).is_err());
        assert!(Cli::try_parse_from(["imgsmlr"]).is_err());
    }

    // Tests out-of-range precision is rejected before any work
    // Verified by clamping the precision silently
    #[test]
    fn test_invalid_precision() {
        let (result, output) = run(&["imgsmlr", "-p", "12", "fingerprint", "missing.png"]);

        assert!(matches!(
            result,
            Err(FingerprintError::InvalidParameter {
                parameter: "precision",
                ..
            })
        ));
        assert!(output.is_empty());
    }

    // Tests a single image prints its path and signature
    // Verified by printing the unshuffled pattern
    #[test]
    fn test_fingerprint_single_file() {
        let dir = image_directory();
        let file = dir.path().join("diagonal.png");

        let (result, output) = run(&["imgsmlr", "fingerprint", path_arg(&file), "--pattern"]);
        result.unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(path_arg(&file)));
        assert!(lines[0].contains("\t("));
        assert!(lines[1].starts_with("pattern: (("));
    }

    // Tests a single degenerate image is an error rather than a skip
    // Verified by printing the skip line for files too
    #[test]
    fn test_fingerprint_single_degenerate() {
        let dir = image_directory();
        let file = dir.path().join("solid.png");

        let (result, _) = run(&["imgsmlr", "fingerprint", path_arg(&file)]);
        assert!(matches!(result, Err(FingerprintError::DegenerateContent)));

        let missing = dir.path().join("absent.png");
        let (result, _) = run(&["imgsmlr", "fingerprint", path_arg(&missing)]);
        assert!(result.is_err());
    }

    // Tests directory runs report every image and keep going
    // Verified by aborting on the first failure
    #[test]
    fn test_fingerprint_directory() {
        let dir = image_directory();

        let (result, output) = run(&["imgsmlr", "fingerprint", path_arg(dir.path()), "-q"]);
        result.unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("corrupt.gif\terror: "));
        assert!(lines[1].contains("diagonal.png\t("));
        assert!(lines[2].contains("solid.png\tskipped: "));
    }

    // Tests comparing an image with itself
    // Verified by comparing signatures with the pattern metric
    #[test]
    fn test_compare_identical() {
        let dir = image_directory();
        let file = dir.path().join("diagonal.png");

        let (result, output) = run(&["imgsmlr", "compare", path_arg(&file), path_arg(&file)]);
        result.unwrap();

        assert_eq!(
            output,
            "pattern_distance: 0.000000\nsignature_distance: 0.000000\n"
        );
    }

    // Tests directory listing filters and sorts
    // Verified by including text files
    #[test]
    fn test_collect_images() {
        let dir = image_directory();
        let files = collect_images(dir.path()).unwrap();

        let names: Vec<_> = files
            .iter()
            .filter_map(|path| path.file_name()?.to_str())
            .collect();
        assert_eq!(names, vec!["corrupt.gif", "diagonal.png", "solid.png"]);

        let missing = dir.path().join("nowhere");
        assert!(matches!(
            collect_images(&missing),
            Err(FingerprintError::FileSystem {
                operation: "read directory",
                ..
            })
        ));
    }

    // Tests extension matching ignores case
    // Verified by comparing case-sensitively
    #[test]
    fn test_supported_extensions() {
        assert!(has_supported_extension(Path::new("a/B.JPG")));
        assert!(has_supported_extension(Path::new("c.jpeg")));
        assert!(has_supported_extension(Path::new("d.gif")));
        assert!(!has_supported_extension(Path::new("e.webp")));
        assert!(!has_supported_extension(Path::new("README")));
    }
}
