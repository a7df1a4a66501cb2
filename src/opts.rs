//! Connection options.

use url::Url;

use crate::error::Error;

/// Connection options for a RamSQL connection.
#[derive(Debug, Clone, Default)]
pub struct Opts {
    /// Name of the in-memory database.
    ///
    /// Default: `""`
    pub name: String,

    /// Reject executions whose argument count differs from the statement's
    /// known parameter count, before anything is sent.
    ///
    /// Default: `false`
    pub check_arg_count: bool,

    /// Additional connection parameters.
    ///
    /// Default: `[]`
    pub params: Vec<(String, String)>,
}

impl TryFrom<&Url> for Opts {
    type Error = Error;

    /// Parse a RamSQL connection URL.
    ///
    /// Format: `ramsql://name[?param1=value1&param2=value2&..]`
    ///
    /// Supported query parameters:
    /// - `check_arg_count`: true/True/1/yes/on or false/False/0/no/off
    fn try_from(url: &Url) -> Result<Self, Self::Error> {
        if url.scheme() != "ramsql" {
            return Err(Error::InvalidUsage(format!(
                "Invalid scheme: expected 'ramsql://', got '{}://'",
                url.scheme()
            )));
        }

        let mut opts = Opts {
            name: url.host_str().unwrap_or_default().to_string(),
            ..Opts::default()
        };

        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "check_arg_count" => {
                    opts.check_arg_count = match value.as_ref() {
                        "true" | "True" | "1" | "yes" | "on" => true,
                        "false" | "False" | "0" | "no" | "off" => false,
                        _ => {
                            return Err(Error::InvalidUsage(format!(
                                "Invalid check_arg_count: {}",
                                value
                            )));
                        }
                    };
                }
                _ => {
                    opts.params.push((key.to_string(), value.to_string()));
                }
            }
        }

        Ok(opts)
    }
}

impl TryFrom<&str> for Opts {
    type Error = Error;

    /// Parse either a `ramsql://` URL or a bare database name.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if !s.contains("://") {
            return Ok(Opts {
                name: s.to_string(),
                ..Opts::default()
            });
        }
        let url = Url::parse(s).map_err(|e| Error::InvalidUsage(format!("Invalid URL: {}", e)))?;
        Self::try_from(&url)
    }
}
