use pathladder_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Output format named on a raw argument list.
///
/// Used when clap rejects the command line and no `Cli` exists yet. Values
/// are read with [`parse_output_format`], so `JSON` counts as `json`; the
/// last valid `--format` wins and unknown values are ignored.
pub fn requested_format<I, S>(args: I) -> Option<OutputFormat>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args = args.into_iter();
    let mut format = None;
    while let Some(arg) = args.next() {
        let value = match arg.as_ref().strip_prefix("--format=") {
            Some(value) => Some(value.to_string()),
            None if arg.as_ref() == "--format" => args.next().map(|v| v.as_ref().to_string()),
            None => None,
        };
        if let Some(parsed) = value.and_then(|v| parse_output_format(&v).ok()) {
            format = Some(parsed);
        }
    }
    format
}
