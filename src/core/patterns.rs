use crate::utils::error::{PcsError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Named regex fragments for the URL shapes used on procyclingstats.com.
///
/// Every fragment is one capturing group, and every path fragment starts
/// with one or more `/`, so fragments can be concatenated in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlPart {
    /// `https://www.procyclingstats.com/`
    BaseUrl,
    /// `/This-is-url-StriNg`
    UrlStr,
    /// `/1111`
    Year,
    /// `/stage-20/gc`, `/prologue-youth` or `/gc`
    Stage,
    /// `/result`
    Result,
    /// `/overview`
    Overview,
    /// `/startlist`
    Startlist,
    /// `/bora-hansgrohe-2022` or `/movistar-team-20152`
    TeamUrlStr,
    /// `/ffefwf//fwefw/aa`
    Anything,
}

impl UrlPart {
    pub const ALL: [UrlPart; 9] = [
        UrlPart::BaseUrl,
        UrlPart::UrlStr,
        UrlPart::Year,
        UrlPart::Stage,
        UrlPart::Result,
        UrlPart::Overview,
        UrlPart::Startlist,
        UrlPart::TeamUrlStr,
        UrlPart::Anything,
    ];

    pub const fn pattern(self) -> &'static str {
        match self {
            UrlPart::BaseUrl => r"(https://www\.procyclingstats\.com/+)",
            UrlPart::UrlStr => r"(/+([a-zA-Z]+-)*([a-zA-Z]+))",
            UrlPart::Year => r"(/+\d{4})",
            UrlPart::Stage => {
                r"(/+(((stage-([1-9]([0-9])?([a-z])?)|prologue)(/gc|-points|-kom|-youth|-teams)?)|gc))"
            }
            UrlPart::Result => r"(/+result)",
            UrlPart::Overview => r"(/+overview)",
            UrlPart::Startlist => r"(/+startlist)",
            UrlPart::TeamUrlStr => r"(/+(([a-zA-Z0-9]+-)+)\d{4,5})",
            UrlPart::Anything => r"(/+.*)",
        }
    }

    pub const fn example(self) -> &'static str {
        match self {
            UrlPart::BaseUrl => "https://www.procyclingstats.com/",
            UrlPart::UrlStr => "/This-is-url-StriNg",
            UrlPart::Year => "/1111",
            UrlPart::Stage => "/stage-20/gc",
            UrlPart::Result => "/result",
            UrlPart::Overview => "/overview",
            UrlPart::Startlist => "/startlist",
            UrlPart::TeamUrlStr => "/bora-hansgrohe-2022",
            UrlPart::Anything => "/ffefwf//fwefw/aa",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            UrlPart::BaseUrl => "base_url",
            UrlPart::UrlStr => "url_str",
            UrlPart::Year => "year",
            UrlPart::Stage => "stage",
            UrlPart::Result => "result",
            UrlPart::Overview => "overview",
            UrlPart::Startlist => "startlist",
            UrlPart::TeamUrlStr => "team_url_str",
            UrlPart::Anything => "anything",
        }
    }
}

impl fmt::Display for UrlPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UrlPart {
    type Err = PcsError;

    fn from_str(s: &str) -> Result<Self> {
        UrlPart::ALL
            .into_iter()
            .find(|part| part.name() == s)
            .ok_or_else(|| PcsError::InvalidArgument {
                argument: s.to_string(),
                reason: format!(
                    "unknown URL part, expected one of: {}",
                    UrlPart::ALL.map(UrlPart::name).join(", ")
                ),
            })
    }
}

/// Concatenates `parts` into one regex that must match the whole input.
pub fn compose(parts: &[UrlPart]) -> Result<Regex> {
    let body: String = parts.iter().map(|part| part.pattern()).collect();
    Ok(Regex::new(&format!(r"\A{}\z", body))?)
}

/// Whether `url` has exactly the shape described by `parts`.
pub fn matches(url: &str, parts: &[UrlPart]) -> Result<bool> {
    let re = compose(parts)?;
    let matched = re.is_match(url);
    tracing::debug!("{} against {:?}: {}", url, parts, matched);
    Ok(matched)
}
