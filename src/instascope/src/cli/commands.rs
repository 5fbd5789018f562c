use crate::lookup::{LookupRequest, SearchKind};
use clap::{ArgGroup, Parser};

#[derive(Parser, Debug, Clone)]
#[clap(
    name = "instascope",
    about = "Look up public and obfuscated profile information of an account",
    version = env!("CARGO_PKG_VERSION")
)]
#[clap(group(ArgGroup::new("target").required(true).args(["username", "id"])))]
pub struct Cli {
    /// Session id cookie used to authenticate the requests
    #[clap(long = "sessionid", short = 's')]
    pub session_id: String,

    /// Username of the account to look up
    #[clap(long, short)]
    pub username: Option<String>,

    /// Numeric id of the account to look up
    #[clap(long, short)]
    pub id: Option<String>,

    /// Print the result as JSON instead of the text report
    #[clap(long)]
    pub json: bool,

    /// Path to a TOML configuration file
    #[clap(long)]
    pub config: Option<String>,
}

impl Cli {
    pub fn lookup_request(&self) -> LookupRequest {
        match &self.id {
            Some(id) => LookupRequest::new(id.as_str(), SearchKind::Id, self.session_id.as_str()),
            None => LookupRequest::new(
                self.username.clone().unwrap_or_default(),
                SearchKind::Username,
                self.session_id.as_str(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use rstest::rstest;

    #[test]
    fn test_username_request() {
        let cli = Cli::try_parse_from(["instascope", "-s", "token", "-u", "alice"]).unwrap();
        assert_eq!(
            cli.lookup_request(),
            LookupRequest::new("alice", SearchKind::Username, "token")
        );
        assert!(!cli.json);
    }

    #[test]
    fn test_id_request() {
        let cli =
            Cli::try_parse_from(["instascope", "--sessionid", "token", "--id", "123", "--json"])
                .unwrap();
        assert_eq!(
            cli.lookup_request(),
            LookupRequest::new("123", SearchKind::Id, "token")
        );
        assert!(cli.json);
    }

    #[rstest]
    #[case(&["instascope", "-u", "alice"], ErrorKind::MissingRequiredArgument)]
    #[case(&["instascope", "-s", "token"], ErrorKind::MissingRequiredArgument)]
    #[case(&["instascope", "-s", "token", "-u", "alice", "-i", "1"], ErrorKind::ArgumentConflict)]
    fn test_invalid_arguments(#[case] args: &[&str], #[case] kind: ErrorKind) {
        let error = Cli::try_parse_from(args).unwrap_err();
        assert_eq!(error.kind(), kind);
    }
}
