use std::collections::BTreeMap;

/// A dependency referenced by filesystem path, declared with an explicit name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalDependency {
    pub name: String,
    pub path: String,
}

impl LocalDependency {
    pub fn new(name: String, path: String) -> Self {
        Self { name, path }
    }
}

/// One project's dependencies, in order of appearance in its manifest.
///
/// Duplicates are kept; nothing is merged or normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    pub remote: Vec<String>,
    pub local: Vec<LocalDependency>,
}

/// Dependency graph keyed by project name.
///
/// Only scanned projects appear as entries; dependency targets exist solely
/// in the serialized output. The ordered map makes iteration, and therefore
/// serialization, deterministic.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    projects: BTreeMap<String, DependencySet>,
}

impl DependencyGraph {
    /// Iterates projects in ascending name order.
    pub fn projects(&self) -> impl Iterator<Item = (&str, &DependencySet)> {
        self.projects.iter().map(|(name, deps)| (name.as_str(), deps))
    }

    pub fn get(&self, project: &str) -> Option<&DependencySet> {
        self.projects.get(project)
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

pub struct GraphBuilder {
    projects: BTreeMap<String, DependencySet>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            projects: BTreeMap::new(),
        }
    }

    /// Records a project's dependencies. A repeated project name replaces the
    /// earlier record wholesale.
    pub fn add_project(&mut self, name: String, dependencies: DependencySet) {
        self.projects.insert(name, dependencies);
    }

    pub fn build(self) -> DependencyGraph {
        DependencyGraph {
            projects: self.projects,
        }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
