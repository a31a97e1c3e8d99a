//! Incoming invocation requests.

use serde::{Deserialize, Serialize};

/// One request from the host: an operation name and its string arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    /// Requested operation name
    pub function: String,
    /// Positional arguments
    #[serde(default)]
    pub args: Vec<String>,
}

impl Invocation {
    /// Build an invocation from a name and arguments
    pub fn new<I, S>(function: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Invocation {
            function: function.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Split the host's flat argument vector: the first element names the
    /// function, the rest are its arguments.
    ///
    /// An empty vector yields an empty function name, which no operation
    /// matches.
    pub fn from_raw_args<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut raw = raw.into_iter().map(Into::into);
        let function = raw.next().unwrap_or_default();
        Invocation {
            function,
            args: raw.collect(),
        }
    }
}
