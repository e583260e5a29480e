use std::path::{Path, PathBuf};

pub const HEADER: &str = "GROUP,PACKAGE,CLASS,INSTRUCTION_MISSED,INSTRUCTION_COVERED,\
BRANCH_MISSED,BRANCH_COVERED,LINE_MISSED,LINE_COVERED,COMPLEXITY_MISSED,\
COMPLEXITY_COVERED,METHOD_MISSED,METHOD_COVERED";

/// Write a JaCoCo CSV report with one class row per
/// `(missed, covered, missed_branches, covered_branches)` tuple.
pub fn write_report(dir: &Path, name: &str, rows: &[(u64, u64, u64, u64)]) -> PathBuf {
    let mut content = format!("{HEADER}\n");
    for (i, (mi, ci, mb, cb)) in rows.iter().enumerate() {
        content.push_str(&format!(
            "app,com.example,Class{i},{mi},{ci},{mb},{cb},0,1,0,1,0,1\n"
        ));
    }
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}
