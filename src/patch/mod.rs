pub mod endpoints;
pub mod schema;
pub mod template;

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{Error, Result};
use crate::snapshot::Snapshot;

/// A literal text edit. Anchors must match byte for byte.
#[derive(Debug, Clone, Copy)]
pub enum Edit {
    /// Replace the first occurrence of `anchor`.
    Replace {
        anchor: &'static str,
        replacement: &'static str,
    },
    /// Insert `block` right after the first occurrence of `anchor`, unless
    /// `marker` is already in the file.
    InsertAfter {
        anchor: &'static str,
        block: &'static str,
        marker: &'static str,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct Patch {
    pub name: &'static str,
    pub edit: Edit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    Applied,
    AlreadyApplied,
    AnchorNotFound,
}

impl fmt::Display for PatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchOutcome::Applied => write!(f, "applied"),
            PatchOutcome::AlreadyApplied => write!(f, "already applied"),
            PatchOutcome::AnchorNotFound => write!(f, "anchor not found"),
        }
    }
}

impl Snapshot {
    pub fn apply(&mut self, patch: &Patch) -> PatchOutcome {
        let text = self.content();
        let next = match patch.edit {
            Edit::Replace {
                anchor,
                replacement,
            } => {
                if !text.contains(anchor) {
                    return PatchOutcome::AnchorNotFound;
                }
                text.replacen(anchor, replacement, 1)
            }
            Edit::InsertAfter {
                anchor,
                block,
                marker,
            } => {
                if text.contains(marker) {
                    return PatchOutcome::AlreadyApplied;
                }
                let Some(pos) = text.find(anchor) else {
                    return PatchOutcome::AnchorNotFound;
                };
                let at = pos + anchor.len();
                let mut out = String::with_capacity(text.len() + block.len());
                out.push_str(&text[..at]);
                out.push_str(block);
                out.push_str(&text[at..]);
                out
            }
        };
        self.set_content(next);
        PatchOutcome::Applied
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PatchOptions {
    pub dry_run: bool,
    pub strict: bool,
}

#[derive(Debug, Clone)]
pub struct PatchReport {
    pub path: PathBuf,
    pub steps: Vec<(&'static str, PatchOutcome)>,
    pub written: bool,
    pub before: String,
    pub after: String,
}

impl PatchReport {
    pub fn applied(&self) -> usize {
        self.steps
            .iter()
            .filter(|(_, o)| *o == PatchOutcome::Applied)
            .count()
    }

    pub fn missing(&self) -> Vec<&'static str> {
        self.steps
            .iter()
            .filter(|(_, o)| *o == PatchOutcome::AnchorNotFound)
            .map(|(name, _)| *name)
            .collect()
    }
}

/// Apply `patches` in order to the file at `path`, report each step to `out`
/// and write the file once if anything changed.
pub fn run_patch_set<W: Write>(
    path: &Path,
    patches: &[Patch],
    options: PatchOptions,
    out: &mut W,
) -> Result<PatchReport> {
    let mut snap = Snapshot::load(path)?;
    debug!("Loaded {} ({})", path.display(), snap.original_fingerprint());

    let mut steps = Vec::with_capacity(patches.len());
    for patch in patches {
        let outcome = snap.apply(patch);
        writeln!(out, "{}: {}", patch.name, outcome).map_err(|e| Error::Io {
            path: PathBuf::from("<stdout>"),
            source: e,
        })?;
        steps.push((patch.name, outcome));
    }

    let written = snap.is_changed() && !options.dry_run;
    if written {
        snap.save()?;
        info!("Wrote {} ({})", path.display(), snap.fingerprint());
    } else if snap.is_changed() {
        info!("Dry run, {} left untouched", path.display());
    } else {
        info!("No changes to {}", path.display());
    }

    let report = PatchReport {
        path: path.to_path_buf(),
        steps,
        written,
        before: snap.original_fingerprint(),
        after: snap.fingerprint(),
    };

    let missing = report.missing();
    if options.strict && !missing.is_empty() {
        return Err(Error::AnchorsMissing {
            missing: missing.into_iter().map(String::from).collect(),
        });
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SWAP: Patch = Patch {
        name: "swap",
        edit: Edit::Replace {
            anchor: "one",
            replacement: "uno",
        },
    };

    const ADD: Patch = Patch {
        name: "add",
        edit: Edit::InsertAfter {
            anchor: "}\n",
            block: "\n// extra\n",
            marker: "// extra",
        },
    };

    fn snap(text: &str) -> Snapshot {
        Snapshot::from_text(Path::new("mem"), text.to_string())
    }

    #[test]
    fn replace_first_occurrence_only() {
        let mut s = snap("one two one");
        assert_eq!(s.apply(&SWAP), PatchOutcome::Applied);
        assert_eq!(s.content(), "uno two one");
    }

    #[test]
    fn replace_missing_anchor_is_noop() {
        let mut s = snap("two");
        assert_eq!(s.apply(&SWAP), PatchOutcome::AnchorNotFound);
        assert!(!s.is_changed());
    }

    #[test]
    fn insert_after_anchor_once() {
        let mut s = snap("a {\n}\nb\n}\n");
        assert_eq!(s.apply(&ADD), PatchOutcome::Applied);
        assert_eq!(s.content(), "a {\n}\n\n// extra\nb\n}\n");
        assert_eq!(s.apply(&ADD), PatchOutcome::AlreadyApplied);
        assert_eq!(s.content(), "a {\n}\n\n// extra\nb\n}\n");
    }

    #[test]
    fn strict_reports_missing_steps() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f.txt");
        std::fs::write(&path, "one\n").unwrap();

        let mut out = Vec::new();
        let err = run_patch_set(
            &path,
            &[SWAP, ADD],
            PatchOptions {
                dry_run: false,
                strict: true,
            },
            &mut out,
        )
        .unwrap_err();
        match err {
            Error::AnchorsMissing { missing } => assert_eq!(missing, vec!["add".to_string()]),
            other => panic!("unexpected error: {}", other),
        }
        // The successful step is still written before the strict check fails.
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "uno\n");
        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed, "swap: applied\nadd: anchor not found\n");
    }

    #[test]
    fn dry_run_never_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f.txt");
        std::fs::write(&path, "one\n").unwrap();

        let report = run_patch_set(
            &path,
            &[SWAP],
            PatchOptions {
                dry_run: true,
                strict: false,
            },
            &mut std::io::sink(),
        )
        .unwrap();
        assert_eq!(report.applied(), 1);
        assert!(!report.written);
        assert_ne!(report.before, report.after);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\n");
    }
}
