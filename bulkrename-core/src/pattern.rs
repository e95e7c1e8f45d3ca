use chrono::{DateTime, Local};
use rand::{distributions::Alphanumeric, Rng};
use regex::{Captures, Regex};
use std::io;
use std::path::Path;
use std::sync::OnceLock;

/// Per-file inputs needed to expand a filename template: the source path,
/// its last-modified time, and the current batch counter value.
#[derive(Debug, Clone)]
pub struct ExpandContext<'a> {
    pub path: &'a Path,
    pub modified: DateTime<Local>,
    pub counter: u64,
}

impl<'a> ExpandContext<'a> {
    /// Build a context from the file's on-disk metadata.
    pub fn for_file(path: &'a Path, counter: u64) -> io::Result<Self> {
        let modified = std::fs::metadata(path)?.modified()?;
        Ok(Self {
            path,
            modified: DateTime::from(modified),
            counter,
        })
    }

    /// Build a context with an explicit timestamp (no filesystem access).
    pub fn with_modified(path: &'a Path, modified: DateTime<Local>, counter: u64) -> Self {
        Self {
            path,
            modified,
            counter,
        }
    }
}

/// Date/time placeholders, resolved against the file's mtime with fixed
/// formats. These are substituted textually before the parametrized pass.
const DATE_FORMATS: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("MM", "%m"),
    ("DD", "%d"),
    ("hh", "%H"),
    ("mm", "%M"),
    ("ss", "%S"),
    ("date", "%Y-%m-%d"),
    ("time", "%H-%M-%S"),
    ("datetime", "%Y-%m-%d_%H-%M-%S"),
];

type PlaceholderFn = fn(&ExpandContext<'_>, &str) -> String;

/// Parametrized placeholders, dispatched through a single regex pass over
/// `{name}` / `{name:parameter}` tokens. Unknown names pass through verbatim
/// so a malformed template degrades to a literal filename instead of an
/// error.
const PLACEHOLDERS: &[(&str, PlaceholderFn)] = &[
    ("count", expand_count),
    ("random", expand_random),
    ("ext", expand_ext),
    ("origname", expand_origname),
];

fn expand_count(ctx: &ExpandContext<'_>, parameter: &str) -> String {
    match parameter.parse::<usize>() {
        Ok(width) => format!("{:0width$}", ctx.counter),
        Err(_) => ctx.counter.to_string(),
    }
}

fn expand_random(_ctx: &ExpandContext<'_>, parameter: &str) -> String {
    let len = parameter.parse::<usize>().unwrap_or(5);
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn expand_ext(ctx: &ExpandContext<'_>, _parameter: &str) -> String {
    ctx.path
        .extension()
        .map_or_else(String::new, |e| e.to_string_lossy().into_owned())
}

fn expand_origname(ctx: &ExpandContext<'_>, _parameter: &str) -> String {
    ctx.path
        .file_stem()
        .map_or_else(String::new, |s| s.to_string_lossy().into_owned())
}

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([^:}]+)(?::([^}]+))?\}").unwrap())
}

/// Expand a filename template for one file. Date placeholders are replaced
/// first as exact literals, then the remaining `{...}` tokens are resolved in
/// a single regex pass. The two-pass order means a date key appearing inside
/// another placeholder's parameter is never substituted.
pub fn expand_template(template: &str, ctx: &ExpandContext<'_>) -> String {
    let mut expanded = template.to_string();

    for (key, format) in DATE_FORMATS {
        let token = format!("{{{key}}}");
        if expanded.contains(&token) {
            expanded = expanded.replace(&token, &ctx.modified.format(format).to_string());
        }
    }

    placeholder_regex()
        .replace_all(&expanded, |caps: &Captures<'_>| {
            let name = &caps[1];
            let parameter = caps.get(2).map_or("", |m| m.as_str());
            match PLACEHOLDERS.iter().find(|(n, _)| *n == name) {
                Some((_, expand)) => expand(ctx, parameter),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
