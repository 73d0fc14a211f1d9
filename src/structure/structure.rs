use serde::Serialize;
use std::convert::TryFrom;
use std::path::{Path, PathBuf};

use hdf5::{File, LocationType};
use log::{debug, trace};

use super::types::ElementType;
use crate::error::{InspectError, Result};

/// The top-level layout of a HDF5 file.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct Structure {
    path: PathBuf,
    entries: Vec<Entry>,
}

/// A named member of the root group.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct Entry {
    pub name: String,

    #[serde(flatten)]
    pub node: Node,
}

#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Dataset { shape: Vec<u64>, dtype: ElementType },

    /// Member names of the group, not expanded any further.
    Group { members: Vec<String> },
}

impl Node {
    pub fn is_dataset(&self) -> bool {
        matches!(self, Node::Dataset { .. })
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Node::Group { .. })
    }
}

impl TryFrom<&Path> for Structure {
    type Error = InspectError;

    fn try_from(p: &Path) -> Result<Structure> {
        Structure::inspect(p)
    }
}

impl TryFrom<&hdf5::File> for Structure {
    type Error = InspectError;

    fn try_from(f: &hdf5::File) -> Result<Structure> {
        let path = PathBuf::from(&f.filename());

        Structure::inspect_file(f, path)
    }
}

impl Structure {
    /// Open an existing HDF5 file read-only and list its top-level members.
    ///
    /// The file is closed again before this returns, also when it fails.
    pub fn inspect<P>(path: P) -> Result<Structure>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        // a failed stat (e.g. permission denied) is not a missing file
        match path.try_exists() {
            Ok(true) => (),
            Ok(false) => return Err(InspectError::FileNotFound(path.into())),
            Err(e) => {
                return Err(InspectError::OpenOrRead(hdf5::Error::Internal(format!(
                    "{}: {e}",
                    path.display()
                ))))
            }
        }

        debug!("opening {}", path.display());
        let hf = File::open(path)?;

        Structure::inspect_file(&hf, path)
    }

    /// List the top-level members of an open HDF5 file.
    ///
    /// Members that are neither datasets nor groups (committed datatypes) are skipped.
    pub fn inspect_file<P>(hf: &hdf5::File, path: P) -> Result<Structure>
    where
        P: Into<PathBuf>,
    {
        let entries = hf
            .member_names()?
            .into_iter()
            .map(|name| -> Result<Option<Entry>> {
                let node = match hf.loc_type_by_name(&name)? {
                    LocationType::Dataset => {
                        let ds = hf.dataset(&name)?;

                        Node::Dataset {
                            shape: ds.shape().into_iter().map(|u| u as u64).collect(),
                            dtype: ElementType::from(ds.dtype()?),
                        }
                    }
                    LocationType::Group => Node::Group {
                        members: hf.group(&name)?.member_names()?,
                    },
                    other => {
                        debug!("{name}: skipping {other:?}");
                        return Ok(None);
                    }
                };

                trace!("{name}: {node:?}");
                Ok(Some(Entry { name, node }))
            })
            .filter_map(Result::transpose)
            .collect::<Result<Vec<Entry>>>()?;

        let path = path.into();
        debug!("{}: {} top-level entries", path.display(), entries.len());

        Ok(Structure { path, entries })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.path.as_ref()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn entry(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn inspect_missing_file() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("missing.h5");

        match Structure::inspect(&p) {
            Err(InspectError::FileNotFound(fp)) => assert_eq!(fp, p),
            r => panic!("unexpected: {r:?}"),
        }
    }

    #[test]
    fn inspect_open_file() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("open.h5");

        let hf = File::create(&p).unwrap();
        hf.new_dataset::<u16>().shape(7_usize).create("counts").unwrap();
        hf.create_group("meta").unwrap();

        let s = Structure::try_from(&hf).unwrap();
        println!("structure: {s:#?}");

        assert_eq!(s.len(), 2);
        assert!(s.entry("counts").unwrap().node.is_dataset());
        assert!(s.entry("meta").unwrap().node.is_group());
        assert_eq!(
            s.entry("meta").unwrap().node,
            Node::Group { members: vec![] }
        );
    }

    #[cfg(unix)]
    #[test]
    fn inspect_unreadable_directory() {
        use std::fs::{self, Permissions};
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        let p = locked.join("data.h5");
        File::create(&p).unwrap();

        fs::set_permissions(&locked, Permissions::from_mode(0o000)).unwrap();
        let can_stat = p.try_exists().is_ok();
        let r = Structure::inspect(&p);
        fs::set_permissions(&locked, Permissions::from_mode(0o755)).unwrap();

        if can_stat {
            // running as root, permissions are not enforced
            return;
        }

        match r {
            Err(e @ InspectError::OpenOrRead(_)) => {
                assert!(e.to_string().contains("data.h5"), "{e}")
            }
            r => panic!("unexpected: {r:?}"),
        }
    }

    #[test]
    fn empty_file() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("empty.h5");
        File::create(&p).unwrap();

        let s = Structure::try_from(p.as_path()).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.path(), p);
    }
}
