use crate::error::BumpError;
use log::debug;
use regex::Regex;
use semver::Version;
use std::ops::Range;
use std::str::FromStr;

/// The component of a `major.minor.patch` version to increment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Part {
    Major,
    Minor,
    Patch,
}

impl FromStr for Part {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "major" => Ok(Part::Major),
            "minor" => Ok(Part::Minor),
            "patch" => Ok(Part::Patch),
            other => Err(BumpError::InvalidPart(other.to_string())),
        }
    }
}

impl Part {
    /// Computes the next version. Every component below `self` is reset to zero.
    pub fn apply(self, version: &Version) -> Result<Version, BumpError> {
        let next = match self {
            Part::Major => Version::new(increment(version.major)?, 0, 0),
            Part::Minor => Version::new(version.major, increment(version.minor)?, 0),
            Part::Patch => Version::new(version.major, version.minor, increment(version.patch)?),
        };
        debug!("Incrementing version from {} -> {}", version, next);
        Ok(next)
    }
}

fn increment(component: u64) -> Result<u64, BumpError> {
    component
        .checked_add(1)
        .ok_or_else(|| BumpError::ComponentOutOfRange(format!("{component} + 1")))
}

/// The leftmost version string found in a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMatch {
    /// Byte offset of the first digit.
    pub start: usize,
    /// Byte offset one past the last digit.
    pub end: usize,
    pub version: Version,
}

impl VersionMatch {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns `content` with this match replaced by `version`. Everything outside the
    /// match, later version strings included, is kept byte-for-byte.
    pub fn splice(&self, content: &str, version: &Version) -> String {
        let mut new_contents = content.to_string();
        new_contents.replace_range(self.range(), &version.to_string());
        new_contents
    }
}

pub fn version_match_regex() -> Result<Regex, BumpError> {
    Ok(Regex::new(r"([0-9]+)\.([0-9]+)\.([0-9]+)")?)
}

/// Finds the first `major.minor.patch` triple in `content`. Later occurrences are ignored.
pub fn find_first(content: &str) -> Result<Option<VersionMatch>, BumpError> {
    let version_regex = version_match_regex()?;
    let Some(captures) = version_regex.captures(content) else {
        return Ok(None);
    };
    let Some(whole) = captures.get(0) else {
        return Ok(None);
    };

    let version = Version::new(
        parse_component(&captures[1])?,
        parse_component(&captures[2])?,
        parse_component(&captures[3])?,
    );
    debug!(
        "Found version {} at bytes {}..{}",
        version,
        whole.start(),
        whole.end()
    );

    Ok(Some(VersionMatch {
        start: whole.start(),
        end: whole.end(),
        version,
    }))
}

fn parse_component(digits: &str) -> Result<u64, BumpError> {
    digits
        .parse()
        .map_err(|_| BumpError::ComponentOutOfRange(digits.to_string()))
}
