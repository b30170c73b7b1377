//! Hash grammar:
//!
//! ```text
//! hash      := date-part "/" param "/" surface "/" level ("/" option ("/" option)*)?
//! date-part := "current" | yyyy "/" m "/" d "/" hhh "Z"
//! option    := name ("=" orientation)?     projection, orientation of [0-9.,-]*
//!            | "overlay=" name
//!            | "grid=" name
//! ```
//!
//! Anything after `level` that does not start with `/` is ignored, as is any option
//! matching none of the three forms.

use std::collections::HashSet;

use earth_common::DeviceClass;
use tracing::debug;

use crate::configuration::{
    Configuration, DataSelection, CURRENT, DEFAULT_ORIENTATION, DEFAULT_OVERLAY,
    DEFAULT_PROJECTION,
};
use crate::names::NameSet;

/// Characters that end the option list, as a regex `.` would stop at them.
const LINE_TERMINATORS: &[char] = &['\n', '\r', '\u{2028}', '\u{2029}'];

fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_word_str(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_word)
}

fn is_orientation_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '-' | '.' | ',')
}

/// A cursor over the leading, fixed part of a hash.
struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    fn eat(&mut self, literal: &str) -> Option<()> {
        self.rest = self.rest.strip_prefix(literal)?;
        Some(())
    }

    /// Takes between `min` and `max` ASCII digits, as many as available.
    fn digits(&mut self, min: usize, max: usize) -> Option<&'a str> {
        let len = self
            .rest
            .bytes()
            .take(max)
            .take_while(u8::is_ascii_digit)
            .count();
        if len < min {
            return None;
        }
        let (digits, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some(digits)
    }

    /// Takes one or more word characters.
    fn word(&mut self) -> Option<&'a str> {
        let len = self.rest.find(|c: char| !is_word(c)).unwrap_or(self.rest.len());
        if len == 0 {
            return None;
        }
        let (word, rest) = self.rest.split_at(len);
        self.rest = rest;
        Some(word)
    }
}

/// Re-pads a digit string numerically, so `"9"` becomes `"09"` and `"900"` becomes `"0900"`.
fn pad(digits: &str, width: usize) -> String {
    let value: u32 = digits.parse().unwrap_or(0);
    format!("{:0width$}", value, width = width)
}

/// Parses `date-part "/"`, returning the date and hour.
fn date_part(cursor: &mut Cursor<'_>) -> Option<(String, String)> {
    if cursor.rest.starts_with(CURRENT) {
        cursor.eat(CURRENT)?;
        return Some((CURRENT.to_string(), String::new()));
    }
    let year = cursor.digits(4, 4)?;
    cursor.eat("/")?;
    let month = cursor.digits(1, 2)?;
    cursor.eat("/")?;
    let day = cursor.digits(1, 2)?;
    cursor.eat("/")?;
    let hour = cursor.digits(3, 4)?;
    cursor.eat("Z")?;
    Some((
        format!("{}/{}/{}", year, pad(month, 2), pad(day, 2)),
        pad(hour, 4),
    ))
}

/// Parses the fixed part of the hash, returning the selection and whatever follows `level`.
fn selection(hash: &str) -> Option<(DataSelection, &str)> {
    let mut cursor = Cursor::new(hash);
    let (date, hour) = date_part(&mut cursor)?;
    cursor.eat("/")?;
    let param = cursor.word()?;
    cursor.eat("/")?;
    let surface = cursor.word()?;
    cursor.eat("/")?;
    let level = cursor.word()?;
    let selection = DataSelection {
        date,
        hour,
        param: param.to_string(),
        surface: surface.to_string(),
        level: level.to_string(),
    };
    Some((selection, cursor.rest))
}

/// The option list after `level`: everything after a leading `/` up to the end of the line.
fn option_list(rest: &str) -> Option<&str> {
    let options = rest.strip_prefix('/')?;
    let options = options.split(LINE_TERMINATORS).next().unwrap_or("");
    if options.is_empty() {
        None
    } else {
        Some(options)
    }
}

/// One `/`-separated option after the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashOption<'a> {
    /// `name` or `name=orientation`; a projection if the name is known.
    Projection {
        name: &'a str,
        orientation: Option<&'a str>,
    },
    /// `overlay=name`
    Overlay(&'a str),
    /// `grid=name`
    Grid(&'a str),
    /// Matches none of the forms.
    Unrecognized,
}

impl<'a> HashOption<'a> {
    /// Classifies one option. The forms are tried in order (projection, overlay, grid)
    /// and the first that matches decides, whether or not the option ends up taking effect.
    pub fn classify(segment: &'a str) -> Self {
        let (name, value) = match segment.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (segment, None),
        };
        if is_word_str(name) && value.map_or(true, |v| v.chars().all(is_orientation_char)) {
            return HashOption::Projection {
                name,
                orientation: value,
            };
        }
        if let Some(overlay) = segment.strip_prefix("overlay=") {
            if is_word_str(overlay) {
                return HashOption::Overlay(overlay);
            }
        }
        if let Some(grid) = segment.strip_prefix("grid=") {
            if is_word_str(grid) {
                return HashOption::Grid(grid);
            }
        }
        HashOption::Unrecognized
    }
}

/// Parses a URL hash into a configuration.
///
/// Returns `None` when the hash does not match the grammar at all. Otherwise the
/// selection is always present and options apply left to right:
/// - a projection takes effect only if its name is in `projections`, replacing the
///   orientation with its value (or empty)
/// - an overlay takes effect if it is in `overlays` or is `"default"`
/// - `grid=on` shows grid points; any other value leaves them hidden
///
/// Unknown and malformed options are ignored.
pub fn parse<P, O>(hash: &str, projections: &P, overlays: &O, topology: &str) -> Option<Configuration>
where
    P: NameSet + ?Sized,
    O: NameSet + ?Sized,
{
    let Some((selection, rest)) = selection(hash) else {
        debug!(hash, "Hash does not match the configuration grammar");
        return None;
    };
    let mut configuration = Configuration::with_selection(selection, topology);

    for segment in option_list(rest).into_iter().flat_map(|o| o.split('/')) {
        match HashOption::classify(segment) {
            HashOption::Projection { name, orientation } => {
                if projections.contains_name(name) {
                    configuration.projection = name.to_string();
                    configuration.orientation = orientation.unwrap_or("").to_string();
                } else {
                    debug!(name, "Ignoring unknown projection");
                }
            }
            HashOption::Overlay(overlay) => {
                if overlays.contains_name(overlay) || overlay == DEFAULT_OVERLAY {
                    configuration.overlay_type = overlay.to_string();
                } else {
                    debug!(overlay, "Ignoring unknown overlay");
                }
            }
            HashOption::Grid(grid) => {
                if grid == "on" {
                    configuration.show_grid_points = true;
                }
            }
            HashOption::Unrecognized => {
                if !segment.is_empty() {
                    debug!(segment, "Ignoring unrecognized hash option");
                }
            }
        }
    }

    Some(configuration)
}

/// The configuration to start from when there is no hash.
///
/// Parses the empty hash (which never matches) and forces the projection,
/// orientation, overlay and grid defaults. The result has no data selection.
pub fn build_configuration<P, O>(projections: &P, overlays: &O, topology: &str) -> Configuration
where
    P: NameSet + ?Sized,
    O: NameSet + ?Sized,
{
    let mut configuration = parse("", projections, overlays, topology).unwrap_or_else(|| {
        Configuration {
            selection: None,
            projection: String::new(),
            orientation: String::new(),
            overlay_type: String::new(),
            show_grid_points: false,
            topology: String::new(),
        }
    });
    configuration.projection = DEFAULT_PROJECTION.to_string();
    configuration.orientation = DEFAULT_ORIENTATION.to_string();
    configuration.overlay_type = DEFAULT_OVERLAY.to_string();
    configuration.show_grid_points = false;
    configuration.topology = topology.to_string();
    configuration
}

/// Known names and the topology path, resolved once and reused for every hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashParser {
    projections: HashSet<String>,
    overlays: HashSet<String>,
    topology: String,
}

impl HashParser {
    pub fn new<P, O, S, T>(projections: P, overlays: O, device: DeviceClass) -> Self
    where
        P: IntoIterator<Item = S>,
        O: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            projections: projections.into_iter().map(Into::into).collect(),
            overlays: overlays.into_iter().map(Into::into).collect(),
            topology: device.topology().to_string(),
        }
    }

    /// Replaces the device topology with an explicit resource path.
    pub fn with_topology(mut self, topology: impl Into<String>) -> Self {
        self.topology = topology.into();
        self
    }

    pub fn parse(&self, hash: &str) -> Option<Configuration> {
        parse(hash, &self.projections, &self.overlays, &self.topology)
    }

    pub fn build_configuration(&self) -> Configuration {
        build_configuration(&self.projections, &self.overlays, &self.topology)
    }

    pub fn projections(&self) -> &HashSet<String> {
        &self.projections
    }

    pub fn overlays(&self) -> &HashSet<String> {
        &self.overlays
    }

    pub fn topology(&self) -> &str {
        &self.topology
    }
}
