use clap::{Arg, Command, value_parser};
use std::ffi::OsString;

/// The CLI surface is deliberately a single flag: the side length of the
/// square window. Help and version flags are disabled so anything except
/// `-w|--width <INTEGER>` is a usage error.
#[must_use]
pub fn command() -> Command {
    Command::new("mandel-zoom")
        .about("Interactive Mandelbrot set viewer with scroll-wheel zoom")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("width")
                .short('w')
                .long("width")
                .required(true)
                .value_name("INTEGER")
                .value_parser(value_parser!(u32).range(2..))
                .help("Side length of the square window in pixels"),
        )
}

pub fn parse_width<I, T>(args: I) -> Result<u32, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command().try_get_matches_from(args)?;
    Ok(*matches
        .get_one::<u32>("width")
        .expect("width is a required argument"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_long_flag() {
        assert_eq!(parse_width(["mandel-zoom", "--width", "400"]).unwrap(), 400);
    }

    #[test]
    fn test_parses_short_flag() {
        assert_eq!(parse_width(["mandel-zoom", "-w", "640"]).unwrap(), 640);
    }

    #[test]
    fn test_missing_width_is_an_error() {
        assert!(parse_width(["mandel-zoom"]).is_err());
    }

    #[test]
    fn test_malformed_width_is_an_error() {
        assert!(parse_width(["mandel-zoom", "--width", "abc"]).is_err());
        assert!(parse_width(["mandel-zoom", "--width", "-5"]).is_err());
        assert!(parse_width(["mandel-zoom", "--width", "12.5"]).is_err());
    }

    #[test]
    fn test_degenerate_width_is_rejected() {
        assert!(parse_width(["mandel-zoom", "--width", "0"]).is_err());
        assert!(parse_width(["mandel-zoom", "--width", "1"]).is_err());
        assert!(parse_width(["mandel-zoom", "--width", "2"]).is_ok());
    }

    #[test]
    fn test_unknown_flags_are_rejected() {
        assert!(parse_width(["mandel-zoom", "--width", "400", "--frobnicate"]).is_err());
        assert!(parse_width(["mandel-zoom", "--help"]).is_err());
    }
}
