use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::io;
use super::ResumeSource;
use super::text::load_text;

/// Walks a resume directory breadth-first. Each regular file becomes one
/// `ResumeSource`, identified by its path relative to the root.
pub struct DirIter {
    root: PathBuf,
    path_queue: VecDeque<PathBuf>,
}

impl DirIter {
    pub fn new(path: &Path) -> Self {
        DirIter {
            root: path.to_path_buf(),
            path_queue: VecDeque::from(vec![path.to_path_buf()]),
        }
    }
    fn ignore(path: &Path) -> bool {
        //by default, ignore hidden files on unix like platforms
        path.file_name()
            .map_or(false, |name| name.to_string_lossy().starts_with('.'))
    }
    fn resume_id(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string()
    }
}

impl Iterator for DirIter {
    type Item = ResumeSource;
    fn next(&mut self) -> Option<Self::Item> {
        while let Some(path) = self.path_queue.pop_front() {
            if path != self.root && Self::ignore(&path) {
                log::info!("ignore {}", path.display());
            } else if path.is_file() {
                let id = self.resume_id(&path);
                return Some(match load_text(&path) {
                    Ok(text) => ResumeSource::text(&id, &text),
                    Err(e) => {
                        log::error!("{}: {}", path.display(), e);
                        ResumeSource::Unreadable { id, cause: e.to_string() }
                    }
                });
            } else if path.is_dir() {
                log::debug!("{}...", path.display());
                match path.read_dir() {
                    Ok(entries) => {
                        for entry in entries.flatten() {
                            self.path_queue.push_back(entry.path());
                        }
                    },
                    Err(e) => log::error!("read dir {} failed: {}", path.display(), e),
                }
            }
        }
        None
    }
}

/// All resumes under `path`, sorted by id so runs are reproducible.
pub fn load_resumes(path: &Path) -> io::Result<Vec<ResumeSource>> {
    if !path.is_dir() {
        return Err(io::Error::new(io::ErrorKind::NotFound,
            format!("resume directory {} not found", path.display())));
    }
    let mut resumes: Vec<ResumeSource> = DirIter::new(path).collect();
    resumes.sort_by(|a, b| a.id().cmp(b.id()));
    Ok(resumes)
}
