use thiserror::Error;

pub const USAGE: &str =
    "usage: select_core_cli [--label <text>] [--group <name>=<item,item,...>]... \
     [--pick <number>] [--plain] [--quiet]";

const DEFAULT_LABEL: &str = "Select an item";

/// Parsed invocation of the selector CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub label: String,
    pub groups: Vec<(String, Vec<String>)>,
    pub pick: Option<usize>,
    pub plain: bool,
    pub quiet: bool,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgsError {
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("invalid --pick value: {0}")]
    InvalidPick(String),
    #[error("invalid --group value: {0} (expected <name>=<item,item,...>)")]
    InvalidGroup(String),
    #[error("unknown argument: {0}")]
    Unknown(String),
}

/// Parses argv (without the program name) into [`CliArgs`].
pub fn parse(args: impl IntoIterator<Item = String>) -> Result<CliArgs, ArgsError> {
    let mut parsed = CliArgs {
        label: DEFAULT_LABEL.into(),
        groups: Vec::new(),
        pick: None,
        plain: false,
        quiet: false,
    };

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--label" => {
                parsed.label = args.next().ok_or(ArgsError::MissingValue("--label"))?;
            }
            "--group" => {
                let raw = args.next().ok_or(ArgsError::MissingValue("--group"))?;
                parsed.groups.push(parse_group(&raw)?);
            }
            "--pick" => {
                let raw = args.next().ok_or(ArgsError::MissingValue("--pick"))?;
                let number = raw
                    .parse::<usize>()
                    .map_err(|_| ArgsError::InvalidPick(raw.clone()))?;
                parsed.pick = Some(number);
            }
            "--plain" => parsed.plain = true,
            "--quiet" => parsed.quiet = true,
            other => return Err(ArgsError::Unknown(other.to_string())),
        }
    }

    Ok(parsed)
}

/// Splits `<name>=<item,item,...>` into a group entry. An empty item list
/// (`name=`) yields an empty group.
fn parse_group(raw: &str) -> Result<(String, Vec<String>), ArgsError> {
    let Some((name, items)) = raw.split_once('=') else {
        return Err(ArgsError::InvalidGroup(raw.to_string()));
    };
    if name.is_empty() {
        return Err(ArgsError::InvalidGroup(raw.to_string()));
    }
    let items = if items.is_empty() {
        Vec::new()
    } else {
        items.split(',').map(str::to_string).collect()
    };
    Ok((name.to_string(), items))
}
