//! The three searchable datasets and their file-backed loader.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use zensearch_seeker::{Query, Record};

/// One of the fixed collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Users,
    Tickets,
    Organizations,
}

impl Dataset {
    /// All datasets in menu order.
    pub const ALL: [Dataset; 3] = [Dataset::Users, Dataset::Tickets, Dataset::Organizations];

    /// Parses a menu selector (`1`, `2` or `3`).
    pub fn from_selector(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Dataset::Users),
            "2" => Some(Dataset::Tickets),
            "3" => Some(Dataset::Organizations),
            _ => None,
        }
    }

    /// The menu selector for this dataset.
    pub fn selector(self) -> &'static str {
        match self {
            Dataset::Users => "1",
            Dataset::Tickets => "2",
            Dataset::Organizations => "3",
        }
    }

    /// Lowercase name, also the file stem.
    pub fn name(self) -> &'static str {
        match self {
            Dataset::Users => "users",
            Dataset::Tickets => "tickets",
            Dataset::Organizations => "organizations",
        }
    }

    /// Capitalized name for menus and headings.
    pub fn title(self) -> &'static str {
        match self {
            Dataset::Users => "Users",
            Dataset::Tickets => "Tickets",
            Dataset::Organizations => "Organizations",
        }
    }

    /// Path of this dataset's JSON file inside `dir`.
    pub fn path_in(self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.json", self.name()))
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure to load a dataset at startup.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The file is missing or unreadable.
    #[error("failed to read {dataset} dataset from {}", .path.display())]
    Read {
        dataset: Dataset,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not a JSON array of objects.
    #[error("failed to parse {dataset} dataset from {}", .path.display())]
    Parse {
        dataset: Dataset,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// The dataset that failed to load.
    pub fn dataset(&self) -> Dataset {
        match self {
            CatalogError::Read { dataset, .. } | CatalogError::Parse { dataset, .. } => *dataset,
        }
    }
}

/// Reads one dataset file from `dir`.
pub fn load_dataset(dir: &Path, dataset: Dataset) -> Result<Vec<Record>, CatalogError> {
    let path = dataset.path_in(dir);
    let text = fs::read_to_string(&path).map_err(|source| CatalogError::Read {
        dataset,
        path: path.clone(),
        source,
    })?;
    let records: Vec<Record> =
        serde_json::from_str(&text).map_err(|source| CatalogError::Parse {
            dataset,
            path: path.clone(),
            source,
        })?;
    log::debug!("loaded {} {dataset} from {}", records.len(), path.display());
    Ok(records)
}

/// All three datasets, loaded once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    users: Vec<Record>,
    tickets: Vec<Record>,
    organizations: Vec<Record>,
}

impl Catalog {
    /// Loads `users.json`, `tickets.json` and `organizations.json` from `dir`.
    ///
    /// Fails on the first dataset that cannot be read or parsed.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        Ok(Catalog {
            users: load_dataset(dir, Dataset::Users)?,
            tickets: load_dataset(dir, Dataset::Tickets)?,
            organizations: load_dataset(dir, Dataset::Organizations)?,
        })
    }

    /// Builds a catalog from in-memory records.
    pub fn from_records(
        users: Vec<Record>,
        tickets: Vec<Record>,
        organizations: Vec<Record>,
    ) -> Self {
        Catalog {
            users,
            tickets,
            organizations,
        }
    }

    /// Records of one dataset, in file order.
    pub fn records(&self, dataset: Dataset) -> &[Record] {
        match dataset {
            Dataset::Users => &self.users,
            Dataset::Tickets => &self.tickets,
            Dataset::Organizations => &self.organizations,
        }
    }

    /// Field names of the dataset's first record.
    ///
    /// Empty when the dataset has no records.
    pub fn searchable_fields(&self, dataset: Dataset) -> Vec<&str> {
        self.records(dataset)
            .first()
            .map(|record| record.field_names().collect())
            .unwrap_or_default()
    }

    /// Runs a query against one dataset.
    pub fn search(
        &self,
        dataset: Dataset,
        query: &Query,
    ) -> zensearch_seeker::Result<Vec<&Record>> {
        query.filter(self.records(dataset))
    }
}
