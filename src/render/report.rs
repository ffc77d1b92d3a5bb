//! Report assembly: one plain-text file per project.

use anyhow::{Context, Result};
use chrono::Utc;
use std::fs::File;
use std::io::{BufWriter, Write};
use tracing::{debug, warn};

use crate::classify::PathClassifier;
use crate::config::defaults::FLAT_LISTING_MAX_LINES;
use crate::domain::{CandidateFile, InclusionRules, ScanStats, ScanTarget};
use crate::render::file_block::{FileRenderer, PlaceholderReason, RenderedBlock};
use crate::scan::tree::{flat_listing, render_tree};
use crate::scan::walker::FileInventoryWalker;
use crate::utils::format_size;

const BANNER: &str = "============================================================";

/// Orchestrates walker, classifier, and renderer for one project and
/// writes the resulting report.
pub struct ReportAssembler<'a> {
    inclusion: &'a InclusionRules,
    classifier: &'a PathClassifier,
    renderer: &'a FileRenderer,
    include_timestamp: bool,
}

impl<'a> ReportAssembler<'a> {
    pub fn new(
        inclusion: &'a InclusionRules,
        classifier: &'a PathClassifier,
        renderer: &'a FileRenderer,
        include_timestamp: bool,
    ) -> Self {
        Self { inclusion, classifier, renderer, include_timestamp }
    }

    /// Generate the report for one project and return its stats.
    ///
    /// The output file is truncated up front, so a rerun after a cancelled
    /// run always produces a complete report. No per-file failure aborts
    /// the pass; every candidate is either rendered, a placeholder, or a
    /// counted skip.
    pub fn generate(&self, target: &ScanTarget) -> Result<ScanStats> {
        let file = File::create(&target.output_path).with_context(|| {
            format!("Failed to create report file: {}", target.output_path.display())
        })?;
        let mut out = BufWriter::new(file);
        let mut stats = ScanStats::default();

        self.write_header(&mut out, &target.name)?;

        let walker = FileInventoryWalker::new(&target.root, self.inclusion);
        let candidates = walker.list(self.classifier);

        self.write_structure(&mut out, target, &candidates)?;

        writeln!(out, "File contents")?;
        writeln!(out, "-------------")?;
        writeln!(out)?;

        for candidate in &candidates {
            if self.classifier.should_exclude_file(&candidate.path, &candidate.relative_path) {
                debug!("excluded by rule: {}", candidate.relative_path);
                stats.files_skipped_rule += 1;
                continue;
            }

            let block = self.renderer.render(&candidate.path);
            write_block(&mut out, candidate, &block)?;

            match &block {
                RenderedBlock::Content { size_bytes, .. } => {
                    stats.files_included += 1;
                    stats.total_bytes_included += size_bytes;
                }
                RenderedBlock::Placeholder { reason, .. } => match reason {
                    PlaceholderReason::Oversized => stats.files_skipped_oversized += 1,
                    PlaceholderReason::Binary => stats.files_skipped_binary += 1,
                    PlaceholderReason::Unreadable => stats.files_skipped_unreadable += 1,
                },
            }
        }

        out.flush().with_context(|| {
            format!("Failed writing report file: {}", target.output_path.display())
        })?;
        Ok(stats)
    }

    fn write_header<W: Write>(&self, out: &mut W, project_name: &str) -> Result<()> {
        writeln!(out, "{}", BANNER)?;
        writeln!(out, " Project: {}", project_name)?;
        if self.include_timestamp {
            writeln!(out, " Generated: {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"))?;
        }
        if !self.inclusion.target_subdirs.is_empty() {
            writeln!(
                out,
                " Scope: root files plus {}",
                self.inclusion.target_subdirs.join(", ")
            )?;
        }
        writeln!(out, "{}", BANNER)?;
        writeln!(out)?;
        Ok(())
    }

    fn write_structure<W: Write>(
        &self,
        out: &mut W,
        target: &ScanTarget,
        candidates: &[CandidateFile],
    ) -> Result<()> {
        writeln!(out, "Directory structure")?;
        writeln!(out, "-------------------")?;

        match render_tree(&target.root, self.inclusion, self.classifier) {
            Ok(tree) => writeln!(out, "{}", tree)?,
            Err(err) => {
                // Cosmetic fallback only; the report is still complete.
                warn!("tree rendering unavailable for {}: {}", target.name, err);
                writeln!(out, "{}", self.structure_fallback(candidates))?;
            }
        }
        writeln!(out)?;
        Ok(())
    }

    /// Flat structure view showing the same included set as the tree:
    /// rule-excluded candidates are filtered out before listing.
    fn structure_fallback(&self, candidates: &[CandidateFile]) -> String {
        let included: Vec<CandidateFile> = candidates
            .iter()
            .filter(|c| !self.classifier.should_exclude_file(&c.path, &c.relative_path))
            .cloned()
            .collect();
        flat_listing(&included, FLAT_LISTING_MAX_LINES)
    }
}

fn write_block<W: Write>(out: &mut W, candidate: &CandidateFile, block: &RenderedBlock) -> Result<()> {
    writeln!(out, "┌ {}", candidate.relative_path)?;
    writeln!(out, "│ size: {}", format_size(block.size_bytes()))?;
    writeln!(out, "├ ---")?;
    match block {
        RenderedBlock::Content { lines, .. } => {
            for (idx, line) in lines.iter().enumerate() {
                writeln!(out, "{:>5} | {}", idx + 1, line)?;
            }
        }
        RenderedBlock::Placeholder { reason, .. } => {
            writeln!(out, "[{} - content omitted]", reason.note())?;
        }
    }
    writeln!(out, "└ ---")?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExclusionRules;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn assemble(root: &Path, max_file_bytes: u64) -> (ScanStats, String) {
        let inclusion = InclusionRules::default();
        let classifier = PathClassifier::new(&ExclusionRules::default_rules());
        let renderer = FileRenderer::new(max_file_bytes);
        let assembler = ReportAssembler::new(&inclusion, &classifier, &renderer, false);

        let out_dir = TempDir::new().expect("out dir");
        let target = ScanTarget {
            root: root.to_path_buf(),
            name: "fixture".to_string(),
            output_path: out_dir.path().join("fixture_project_code.txt"),
        };

        let stats = assembler.generate(&target).expect("generate");
        let report = fs::read_to_string(&target.output_path).expect("read report");
        (stats, report)
    }

    #[test]
    fn scenario_counts_pruning_and_skipping_separately() {
        let tmp = TempDir::new().expect("tmp");
        let root = tmp.path();
        fs::write(root.join("a.py"), "x = 1\ny = 2\n").expect("write a.py");
        fs::create_dir(root.join("node_modules")).expect("mkdir");
        fs::write(root.join("node_modules/x.js"), "module.exports = {}\n").expect("write x.js");
        fs::write(root.join(".env"), "SECRET=1\n").expect("write .env");
        fs::write(root.join("big.md"), "z".repeat(3_000_000)).expect("write big.md");

        let (stats, report) = assemble(root, 2_097_152);

        // a.py rendered; .env rule-skipped; big.md oversized; x.js pruned
        // (never a candidate, so it does not count as a skip).
        assert_eq!(stats.files_included, 1);
        assert_eq!(stats.files_skipped_rule, 1);
        assert_eq!(stats.files_skipped_oversized, 1);
        assert!(stats.files_skipped() >= 2);

        assert!(report.contains("┌ a.py"));
        assert!(report.contains("    1 | x = 1"));
        assert!(report.contains("    2 | y = 2"));
        assert!(report.contains("┌ big.md"));
        assert!(report.contains("[oversized file - content omitted]"));
        assert!(!report.contains("x.js"));
        assert!(!report.contains("SECRET"));
    }

    #[test]
    fn numbered_lines_match_source_order() {
        let tmp = TempDir::new().expect("tmp");
        let root = tmp.path();
        fs::write(root.join("seq.py"), "one\r\ntwo\r\nthree\r\n").expect("write");

        let (stats, report) = assemble(root, 1024);

        assert_eq!(stats.files_included, 1);
        assert!(report.contains("    1 | one"));
        assert!(report.contains("    2 | two"));
        assert!(report.contains("    3 | three"));
        assert!(!report.contains('\r'));
    }

    #[test]
    fn binary_candidate_becomes_placeholder_in_report() {
        let tmp = TempDir::new().expect("tmp");
        let root = tmp.path();
        fs::write(root.join("blob.md"), [0u8, 1, 2, 3]).expect("write");

        let (stats, report) = assemble(root, 1024);

        assert_eq!(stats.files_included, 0);
        assert_eq!(stats.files_skipped_binary, 1);
        assert!(report.contains("[binary file - content omitted]"));
    }

    #[test]
    fn report_is_reproducible_without_timestamp() {
        let tmp = TempDir::new().expect("tmp");
        let root = tmp.path();
        fs::write(root.join("a.py"), "pass\n").expect("write");
        fs::create_dir(root.join("src")).expect("mkdir");
        fs::write(root.join("src/b.py"), "pass\n").expect("write");

        let (_, first) = assemble(root, 1024);
        let (_, second) = assemble(root, 1024);
        assert_eq!(first, second);
    }

    #[test]
    fn fallback_listing_omits_rule_excluded_candidates() {
        let tmp = TempDir::new().expect("tmp");
        let root = tmp.path();
        fs::write(root.join("app.py"), "pass\n").expect("write");
        fs::write(root.join(".env"), "SECRET=1\n").expect("write");

        let inclusion = InclusionRules::default();
        let classifier = PathClassifier::new(&ExclusionRules::default_rules());
        let renderer = FileRenderer::new(1024);
        let assembler = ReportAssembler::new(&inclusion, &classifier, &renderer, false);

        let walker = FileInventoryWalker::new(root, &inclusion);
        let candidates = walker.list(&classifier);
        assert!(candidates.iter().any(|c| c.relative_path == ".env"));

        let listing = assembler.structure_fallback(&candidates);
        assert!(listing.contains("- app.py"));
        assert!(!listing.contains(".env"));
    }

    #[test]
    fn scoped_report_ignores_other_root_subdirs() {
        let tmp = TempDir::new().expect("tmp");
        let root = tmp.path();
        fs::create_dir(root.join("src")).expect("mkdir src");
        fs::write(root.join("src/app.py"), "pass\n").expect("write app");
        fs::create_dir(root.join("assets")).expect("mkdir assets");
        fs::write(root.join("assets/notes.md"), "secret notes\n").expect("write notes");

        let inclusion = InclusionRules {
            target_subdirs: vec!["src".to_string()],
            ..InclusionRules::default()
        };
        let classifier = PathClassifier::new(&ExclusionRules::default_rules());
        let renderer = FileRenderer::new(1024);
        let assembler = ReportAssembler::new(&inclusion, &classifier, &renderer, false);

        let out_dir = TempDir::new().expect("out dir");
        let target = ScanTarget {
            root: root.to_path_buf(),
            name: "scoped".to_string(),
            output_path: out_dir.path().join("scoped_project_code.txt"),
        };
        let stats = assembler.generate(&target).expect("generate");
        let report = fs::read_to_string(&target.output_path).expect("read report");

        assert_eq!(stats.files_included, 1);
        assert!(report.contains(" Scope: root files plus src"));
        assert!(report.contains("assets/ [...ignored]"));
        assert!(report.contains("┌ src/app.py"));
        assert!(!report.contains("secret notes"));
    }

    #[test]
    fn empty_project_still_produces_a_report() {
        let tmp = TempDir::new().expect("tmp");
        let (stats, report) = assemble(tmp.path(), 1024);

        assert_eq!(stats, ScanStats::default());
        assert!(report.contains("Project: fixture"));
        assert!(report.contains("Directory structure"));
    }
}
