use crate::app::error::{DumpError, DumpResult};
use crate::app::models::{EnvironmentInfo, Item, ResolvedPaths};
use crate::app::paths::to_slash;
use chrono::SecondsFormat;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

const HEADER_BANNER: &str = "// ===== CODEDUMP GENERATED =====";
const HEADER_CLOSE: &str = "// =================================";
const BEGIN_FILE: &str = "// ===== BEGIN FILE =====";
const FILE_HEADER_CLOSE: &str = "// ======================";
const END_FILE: &str = "// ===== END FILE =====";

/// Builds the artifact in memory. Nothing touches the disk until [`OutputGenerator::write`].
pub struct OutputGenerator {
    buf: Vec<u8>,
}

impl OutputGenerator {
    /// Starts a new artifact with the global header block.
    pub fn new(paths: &ResolvedPaths, env: &EnvironmentInfo) -> Self {
        let mut generator = Self { buf: Vec::new() };
        generator.push_header(paths, env);
        generator
    }

    fn push_line(&mut self, line: &str) {
        self.buf.extend_from_slice(line.as_bytes());
        self.buf.push(b'\n');
    }

    fn push_header(&mut self, paths: &ResolvedPaths, env: &EnvironmentInfo) {
        let generated_at = env.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true);

        self.push_line(HEADER_BANNER);
        self.push_line(&format!("// #pwd: {}", env.working_dir.display()));
        self.push_line(&format!("// #generated_at: {}", generated_at));
        self.push_line(&format!("// #go_version: {}", env.runtime_version));
        self.push_line(&format!("// #goroot: {}", env.runtime_root));
        self.push_line(&format!("// #root: {}", to_slash(&paths.root)));
        self.push_line(&format!("// #target: {}", to_slash(&paths.target)));
        self.push_line(&format!("// #out: {}", to_slash(&paths.out)));
        self.push_line(HEADER_CLOSE);
        self.push_line("");
    }

    /// Appends one file block. `content` is the already transformed text.
    pub fn push_file(&mut self, item: &Item, content: &[u8]) {
        self.push_line(BEGIN_FILE);
        self.push_line(&format!("// #rel_path: {}", item.relative_path));
        self.push_line(&format!("// #abs_path: {}", to_slash(&item.absolute_path)));
        self.push_line(&format!("// #size_bytes: {}", item.size_bytes));
        self.push_line(&format!("// #sha256: {}", item.content_hash));
        self.push_line(FILE_HEADER_CLOSE);

        self.buf.extend_from_slice(content);
        if content.last().is_some_and(|&b| b != b'\n') {
            self.buf.push(b'\n');
        }

        self.push_line(END_FILE);
        self.push_line("");
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Writes the finished artifact to `out`, replacing any previous file in one rename.
    pub fn write(&self, out: &Path) -> DumpResult<()> {
        write_atomic(out, &self.buf)
    }
}

/// Creates `out`'s parent directories, writes `bytes` to a sibling temp file and renames
/// it over `out`. Readers see either the old file or the complete new one.
pub fn write_atomic(out: &Path, bytes: &[u8]) -> DumpResult<()> {
    let write_err = |source| DumpError::Write {
        path: out.to_path_buf(),
        source,
    };

    let parent = match out.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(write_err)?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(write_err)?;
    tmp.write_all(bytes).map_err(write_err)?;
    // Temp files are created 0600; the artifact should be as readable as a plain write.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(write_err)?;
    }
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(out).map_err(|e| write_err(e.error))?;
    Ok(())
}
