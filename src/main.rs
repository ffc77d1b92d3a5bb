//! project-digest: generate reviewable plain-text digests of project
//! source trees.

use anyhow::Result;

fn main() -> Result<()> {
    project_digest::cli::run()
}
