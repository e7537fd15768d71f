use std::collections::BTreeSet;

/// One declared source directory paired with the directory its output lands in
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceDirectory {
    pub source: String,
    pub name: String,
    pub module: String,
    pub source_dir: String,
    /// Empty when no output directory shares the source directory's kind tag
    pub output_dir: String,
    /// Inferred kind tag, empty when unmatched
    pub kind: String,
}

/// All source and output directories of one source set
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceDirectorySet {
    pub source: String,
    pub name: String,
    pub module: String,
    pub source_dirs: BTreeSet<String>,
    pub output_dirs: BTreeSet<String>,
}

/// SourcePath - one entry of a module's source layout
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourcePath {
    Directory(SourceDirectory),
    DirectorySet(SourceDirectorySet),
}

impl SourcePath {
    /// Name of the source set this entry belongs to
    pub fn name(&self) -> &str {
        match self {
            SourcePath::Directory(dir) => &dir.name,
            SourcePath::DirectorySet(set) => &set.name,
        }
    }

    pub fn module(&self) -> &str {
        match self {
            SourcePath::Directory(dir) => &dir.module,
            SourcePath::DirectorySet(set) => &set.module,
        }
    }

    pub fn source(&self) -> &str {
        match self {
            SourcePath::Directory(dir) => &dir.source,
            SourcePath::DirectorySet(set) => &set.source,
        }
    }
}
