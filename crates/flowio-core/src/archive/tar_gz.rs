use crate::error::{FsError, Result};
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Component, Path};

type TarGz = tar::Archive<GzDecoder<BufReader<File>>>;

fn open(archive: &Path) -> Result<TarGz> {
    let f = File::open(archive).map_err(|e| FsError::io(archive, e))?;
    Ok(tar::Archive::new(GzDecoder::new(BufReader::new(f))))
}

fn archive_err(archive: &Path, e: io::Error) -> FsError {
    FsError::Archive {
        path: archive.to_path_buf(),
        message: e.to_string(),
    }
}

fn escapes(name: &Path) -> bool {
    name.components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    })
}

/// Unpack a gzip-compressed tar archive into `destination`, creating it first.
///
/// Every entry name is checked before anything is written; an entry that is
/// absolute or climbs out with `..` fails the whole call with
/// [`FsError::UnsafeArchiveEntry`].
pub fn decompress_tar_gz(archive: &Path, destination: &Path) -> Result<()> {
    tracing::debug!(archive = %archive.display(), dest = %destination.display(), "unpacking tar.gz");

    let mut scan = open(archive)?;
    for entry in scan.entries().map_err(|e| archive_err(archive, e))? {
        let entry = entry.map_err(|e| archive_err(archive, e))?;
        let name = entry.path().map_err(|e| archive_err(archive, e))?;
        if escapes(&name) {
            return Err(FsError::UnsafeArchiveEntry {
                archive: archive.to_path_buf(),
                entry: name.display().to_string(),
            });
        }
    }

    fs::create_dir_all(destination).map_err(|e| FsError::io(destination, e))?;
    let mut tar = open(archive)?;
    for entry in tar.entries().map_err(|e| archive_err(archive, e))? {
        let mut entry = entry.map_err(|e| archive_err(archive, e))?;
        let unpacked = entry
            .unpack_in(destination)
            .map_err(|e| archive_err(archive, e))?;
        if !unpacked {
            let name = entry.path().map_err(|e| archive_err(archive, e))?;
            return Err(FsError::UnsafeArchiveEntry {
                archive: archive.to_path_buf(),
                entry: name.display().to_string(),
            });
        }
    }
    Ok(())
}
