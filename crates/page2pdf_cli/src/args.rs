use std::fmt;
use std::path::PathBuf;

const BULK_FLAG: &str = "-b";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Single { url: String, output: PathBuf },
    Bulk { list: PathBuf, output_dir: PathBuf },
}

/// Which usage text to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageError {
    General,
    Bulk,
    Single,
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::General => write!(
                f,
                "Usage:\n\
                 For bulk processing: page2pdf -b <file_with_urls.txt> <output_directory>\n\
                 For single URL: page2pdf <URL> <output.pdf>"
            ),
            UsageError::Bulk => {
                write!(f, "Usage: page2pdf -b <file_with_urls.txt> <output_directory>")
            }
            UsageError::Single => write!(f, "Usage: page2pdf <URL> <output.pdf>"),
        }
    }
}

/// Parse the arguments that follow the program name.
pub fn parse_args(args: &[String]) -> Result<Command, UsageError> {
    if args.len() < 2 {
        return Err(UsageError::General);
    }
    if args[0] == BULK_FLAG {
        let [_, list, output_dir] = args else {
            return Err(UsageError::Bulk);
        };
        return Ok(Command::Bulk {
            list: PathBuf::from(list),
            output_dir: PathBuf::from(output_dir),
        });
    }
    let [url, output] = args else {
        return Err(UsageError::Single);
    };
    Ok(Command::Single {
        url: url.clone(),
        output: PathBuf::from(output),
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_args, Command, UsageError};
    use std::path::PathBuf;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn too_few_arguments_is_general_usage() {
        assert_eq!(parse_args(&args(&[])), Err(UsageError::General));
        assert_eq!(parse_args(&args(&["https://a"])), Err(UsageError::General));
        assert_eq!(parse_args(&args(&["-b"])), Err(UsageError::General));
    }

    #[test]
    fn single_mode_needs_exactly_two() {
        assert_eq!(
            parse_args(&args(&["https://a", "a.pdf"])),
            Ok(Command::Single {
                url: "https://a".into(),
                output: PathBuf::from("a.pdf"),
            })
        );
        assert_eq!(
            parse_args(&args(&["https://a", "a.pdf", "extra"])),
            Err(UsageError::Single)
        );
    }

    #[test]
    fn bulk_mode_needs_exactly_three() {
        assert_eq!(
            parse_args(&args(&["-b", "urls.txt", "out"])),
            Ok(Command::Bulk {
                list: PathBuf::from("urls.txt"),
                output_dir: PathBuf::from("out"),
            })
        );
        assert_eq!(parse_args(&args(&["-b", "urls.txt"])), Err(UsageError::Bulk));
        assert_eq!(
            parse_args(&args(&["-b", "urls.txt", "out", "more"])),
            Err(UsageError::Bulk)
        );
    }
}
