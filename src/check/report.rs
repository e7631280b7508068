//! Broken link report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use super::LinkOrigin;
use crate::utils::plural_s;

/// A single broken link
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct BrokenLink {
    pub origin: LinkOrigin,
    /// The link as written.
    pub target: String,
    pub reason: String,
}

/// Broken links split by the policy that applies to them, grouped by source.
#[derive(Debug, Default)]
pub struct LinkReport {
    /// Links under a `throw` policy.
    pub fatal: BTreeMap<String, Vec<BrokenLink>>,
    /// Links under a `warn` policy.
    pub warnings: BTreeMap<String, Vec<BrokenLink>>,
    /// Links dropped by an `ignore` policy.
    pub ignored: usize,
}

impl LinkReport {
    pub fn add_fatal(&mut self, source: String, link: BrokenLink) {
        self.fatal.entry(source).or_default().push(link);
    }

    pub fn add_warning(&mut self, source: String, link: BrokenLink) {
        self.warnings.entry(source).or_default().push(link);
    }

    /// Sort links within each source so parallel collection stays deterministic.
    pub fn sort(&mut self) {
        for links in self.fatal.values_mut().chain(self.warnings.values_mut()) {
            links.sort();
        }
    }

    pub fn fatal_count(&self) -> usize {
        self.fatal.values().map(Vec::len).sum()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.values().map(Vec::len).sum()
    }

    pub fn has_fatal(&self) -> bool {
        !self.fatal.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        self.fatal.is_empty() && self.warnings.is_empty()
    }

    /// Print the full report to stderr (errors, then warnings).
    pub fn print(&self) {
        Self::print_section("broken links", &self.fatal, true);
        Self::print_section("link warnings", &self.warnings, false);
    }

    fn print_section(name: &str, links: &BTreeMap<String, Vec<BrokenLink>>, fatal: bool) {
        if links.is_empty() {
            return;
        }
        eprintln!();

        let source_count = links.len();
        let link_count: usize = links.values().map(Vec::len).sum();
        let counts = format!(
            "({source_count} source{}, {link_count} link{})",
            plural_s(source_count),
            plural_s(link_count)
        );

        if fatal {
            eprintln!("{} {}", name.red().bold(), counts.dimmed());
        } else {
            eprintln!("{} {}", name.magenta().bold(), counts.dimmed());
        }

        for (source, errs) in links {
            eprintln!("{}{}{}", "[".dimmed(), source.cyan(), "]".dimmed());
            for e in errs {
                eprintln!("{} {} {}", "→".red(), e.target, e.reason.dimmed());
            }
        }
    }
}

impl fmt::Display for LinkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fatal = self.fatal_count();
        let warnings = self.warning_count();

        if fatal == 0 && warnings == 0 {
            return write!(f, "{}", "all links resolved".green());
        }
        write!(
            f,
            "{} {} {}, {} {}",
            "found".dimmed(),
            fatal.to_string().red().bold(),
            format!("broken link{}", plural_s(fatal)).dimmed(),
            warnings.to_string().magenta().bold(),
            format!("warning{}", plural_s(warnings)).dimmed()
        )
    }
}
